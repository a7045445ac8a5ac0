use crate::{
    ast::Stmt,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses the declarations of a block after its opening brace.
    ///
    /// Grammar: `block := "{" declaration* "}"`
    ///
    /// Malformed declarations inside the block are recorded and skipped by
    /// [`Parser::declaration`], so parsing stays inside the block.
    ///
    /// # Returns
    /// The statements of the block, without a wrapping [`Stmt::Block`]; function
    /// bodies reuse this rule.
    ///
    /// # Errors
    /// `Expect '}' after block.` when input ends before the closing brace.
    pub(super) fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }
}
