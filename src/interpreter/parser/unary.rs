use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, Parser},
            utils::unary_operator,
        },
        token::{Literal, TokenKind},
    },
};

impl Parser<'_> {
    /// Parses a prefix unary expression.
    ///
    /// Grammar: `unary := ( "!" | "-" ) unary | call`
    ///
    /// Prefix operators nest, so `!!x` is `(! (! x))`.
    pub(super) fn unary(&mut self) -> ParseResult<Expr> {
        if self.match_kind(&[TokenKind::Bang, TokenKind::Minus]) {
            let token = self.previous();
            let Some(op) = unary_operator(token.kind) else {
                unreachable!("unary matched non prefix operator {}", token.kind)
            };
            let operand = self.unary()?;
            return Ok(Expr::Unary { op,
                                    expr: Box::new(operand),
                                    line: token.line });
        }

        self.call()
    }

    /// Parses a primary expression followed by any number of call suffixes.
    ///
    /// Grammar: `call := primary ( "(" arguments? ")" )*`
    ///
    /// Each call records the line of its closing parenthesis.
    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;

        while self.match_kind(&[TokenKind::LeftParen]) {
            let arguments = self.arguments()?;
            let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?;
            expr = Expr::Call { callee: Box::new(expr),
                                arguments,
                                line: paren.line };
        }

        Ok(expr)
    }

    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "true" | "false" | "nil" | NUMBER | STRING
    ///              | IDENTIFIER | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// `Expect expression.` at the current token when none of the forms apply,
    /// or `Expect ')' after expression.` for an unclosed group.
    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.peek();
        let value = match token.kind {
            TokenKind::False => LiteralValue::Bool(false),
            TokenKind::True => LiteralValue::Bool(true),
            TokenKind::Nil => LiteralValue::Nil,
            TokenKind::Number | TokenKind::String => match &token.literal {
                Some(Literal::Number(n)) => LiteralValue::Number(*n),
                Some(Literal::Str(s)) => s.as_str().into(),
                None => LiteralValue::Nil,
            },
            TokenKind::Identifier => {
                self.advance();
                return Ok(Expr::Variable { name: token.lexeme.clone(),
                                           line: token.line });
            },
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.expression()?;
                self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::Grouping { expr: Box::new(expr) });
            },
            _ => return Err(ParseError::at(token, "Expect expression.")),
        };

        self.advance();
        Ok(Expr::Literal { value })
    }
}
