use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDecl, LiteralValue, Stmt},
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

/// Upper bound on parameters and call arguments.
pub const MAX_ARITY: usize = 255;

impl Parser<'_> {
    /// Parses a declaration, recovering from any error inside it.
    ///
    /// Grammar: `declaration := funDecl | varDecl | statement`
    ///
    /// On failure the error is recorded, the parser synchronizes to the next
    /// statement boundary and `None` is returned.
    pub(super) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.match_kind(&[TokenKind::Fun]) {
            self.function()
        } else if self.match_kind(&[TokenKind::Var]) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(statement) => Some(statement),
            Err(error) => {
                self.errors.push(error);
                self.synchronize();
                None
            },
        }
    }

    /// Parses the rest of a variable declaration after `var`.
    ///
    /// Grammar: `varDecl := "var" IDENTIFIER ( "=" expression )? ";"`
    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;
        let initializer = if self.match_kind(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;

        Ok(Stmt::Var { name: name.lexeme.clone(),
                       initializer })
    }

    /// Parses the rest of a function declaration after `fun`.
    ///
    /// Grammar:
    /// ```text
    ///     funDecl    := "fun" IDENTIFIER "(" parameters? ")" block
    ///     parameters := IDENTIFIER ( "," IDENTIFIER )*
    /// ```
    /// More than 255 parameters is reported but does not stop the parse.
    fn function(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect function name.")?;
        self.consume(TokenKind::LeftParen, "Expect '(' after function name.")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightParen) {
            loop {
                if params.len() >= MAX_ARITY {
                    self.report(self.peek(), "Can't have more than 255 parameters.");
                }
                let param = self.consume(TokenKind::Identifier, "Expect parameter name.")?;
                params.push(param.lexeme.clone());
                if !self.match_kind(&[TokenKind::Comma]) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.consume(TokenKind::LeftBrace, "Expect '{' before function body.")?;
        let body = self.block()?;

        Ok(Stmt::Function(Rc::new(FunctionDecl { name: name.lexeme.clone(),
                                                 params,
                                                 body,
                                                 line: name.line })))
    }

    /// Parses a statement.
    ///
    /// Grammar:
    /// ```text
    ///     statement := forStmt | ifStmt | printStmt | returnStmt
    ///                | whileStmt | block | exprStmt
    /// ```
    pub(super) fn statement(&mut self) -> ParseResult<Stmt> {
        if self.match_kind(&[TokenKind::For]) {
            return self.for_statement();
        }
        if self.match_kind(&[TokenKind::If]) {
            return self.if_statement();
        }
        if self.match_kind(&[TokenKind::Print]) {
            return self.print_statement();
        }
        if self.match_kind(&[TokenKind::Return]) {
            return self.return_statement();
        }
        if self.match_kind(&[TokenKind::While]) {
            return self.while_statement();
        }
        if self.match_kind(&[TokenKind::LeftBrace]) {
            return Ok(Stmt::Block { statements: self.block()? });
        }
        self.expression_statement()
    }

    /// Parses a `for` loop and desugars it.
    ///
    /// `for (init; cond; incr) body` becomes
    /// `{ init; while (cond) { body; incr; } }`. A missing condition is the
    /// literal `true`, and the blocks are only introduced where an
    /// initializer or increment exists.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.match_kind(&[TokenKind::Semicolon]) {
            None
        } else if self.match_kind(&[TokenKind::Var]) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block { statements: vec![body, Stmt::Expression { expr: increment }] };
        }

        let condition = condition.unwrap_or(Expr::Literal { value: LiteralValue::Bool(true) });
        body = Stmt::While { condition,
                             body: Box::new(body) };

        if let Some(initializer) = initializer {
            body = Stmt::Block { statements: vec![initializer, body] };
        }

        Ok(body)
    }

    /// Grammar: `ifStmt := "if" "(" expression ")" statement ( "else" statement )?`
    ///
    /// A dangling `else` binds to the nearest `if`.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_kind(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If { condition,
                      then_branch,
                      else_branch })
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let line = self.previous().line;
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print { expr, line })
    }

    fn return_statement(&mut self) -> ParseResult<Stmt> {
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after return value.")?;
        Ok(Stmt::Return { value })
    }

    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression { expr })
    }
}
