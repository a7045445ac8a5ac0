use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        parser::{
            core::{ParseResult, Parser},
            utils::binary_operator,
        },
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, assignment, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := assignment`
    pub(super) fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    /// Parses a right-associative assignment.
    ///
    /// Grammar: `assignment := IDENTIFIER "=" assignment | logic_or`
    ///
    /// The left side is parsed as an ordinary expression first; only a bare
    /// variable is a valid target. Anything else is reported as
    /// `Invalid assignment target.` and returned unchanged.
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.logic_or()?;

        if !self.match_kind(&[TokenKind::Equal]) {
            return Ok(expr);
        }

        let equals = self.previous();
        let value = self.assignment()?;

        match expr {
            Expr::Variable { name, line } => Ok(Expr::Assign { name,
                                                               value: Box::new(value),
                                                               line }),
            other => {
                self.report(equals, "Invalid assignment target.");
                Ok(other)
            },
        }
    }

    /// Grammar: `logic_or := logic_and ( "or" logic_and )*`
    fn logic_or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.logic_and()?;

        while self.match_kind(&[TokenKind::Or]) {
            let right = self.logic_and()?;
            expr = Expr::Logical { left:  Box::new(expr),
                                   op:    LogicalOperator::Or,
                                   right: Box::new(right), };
        }

        Ok(expr)
    }

    /// Grammar: `logic_and := equality ( "and" equality )*`
    fn logic_and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.equality()?;

        while self.match_kind(&[TokenKind::And]) {
            let right = self.equality()?;
            expr = Expr::Logical { left:  Box::new(expr),
                                   op:    LogicalOperator::And,
                                   right: Box::new(right), };
        }

        Ok(expr)
    }

    /// Grammar: `equality := comparison ( ( "!=" | "==" ) comparison )*`
    fn equality(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::BangEqual, TokenKind::EqualEqual], Self::comparison)
    }

    /// Grammar: `comparison := term ( ( ">" | ">=" | "<" | "<=" ) term )*`
    fn comparison(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Greater,
                                TokenKind::GreaterEqual,
                                TokenKind::Less,
                                TokenKind::LessEqual],
                              Self::term)
    }

    /// Grammar: `term := factor ( ( "-" | "+" ) factor )*`
    fn term(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    /// Grammar: `factor := unary ( ( "/" | "*" ) unary )*`
    fn factor(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    /// Parses one left-associative precedence level.
    ///
    /// # Parameters
    /// - `operators`: Token kinds accepted as operators at this level.
    /// - `operand`: Parser for the next-higher precedence level.
    ///
    /// # Returns
    /// A left-leaning chain of [`Expr::Binary`] nodes, or the single operand
    /// when no operator follows it.
    fn left_associative(&mut self,
                        operators: &[TokenKind],
                        operand: fn(&mut Self) -> ParseResult<Expr>)
                        -> ParseResult<Expr> {
        let mut expr = operand(self)?;

        while self.match_kind(operators) {
            let token = self.previous();
            let Some(op) = binary_operator(token.kind) else {
                unreachable!("left_associative used with non binary operator {}", token.kind)
            };
            let right = operand(self)?;
            expr = Expr::Binary { left: Box::new(expr),
                                  op,
                                  right: Box::new(right),
                                  line: token.line };
        }

        Ok(expr)
    }
}
