use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::{
        parser::{
            core::{ParseResult, Parser},
            statement::MAX_ARITY,
        },
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a comma-separated argument list up to, not including, `)`.
    ///
    /// Grammar: `arguments := expression ( "," expression )*`
    ///
    /// More than 255 arguments is reported at the first extra argument but
    /// parsing continues.
    pub(super) fn arguments(&mut self) -> ParseResult<Vec<Expr>> {
        let mut arguments = Vec::new();

        if !self.check(TokenKind::RightParen) {
            loop {
                if arguments.len() >= MAX_ARITY {
                    self.report(self.peek(), "Can't have more than 255 arguments.");
                }
                arguments.push(self.expression()?);
                if !self.match_kind(&[TokenKind::Comma]) {
                    break;
                }
            }
        }

        Ok(arguments)
    }
}

/// Maps an operator token to its binary operator.
///
/// # Returns
/// `None` for tokens that are not binary operators, including `and`/`or`.
#[must_use]
pub const fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    let op = match kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Sub,
        TokenKind::Star => BinaryOperator::Mul,
        TokenKind::Slash => BinaryOperator::Div,
        TokenKind::Less => BinaryOperator::Less,
        TokenKind::LessEqual => BinaryOperator::LessEqual,
        TokenKind::Greater => BinaryOperator::Greater,
        TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
        TokenKind::EqualEqual => BinaryOperator::Equal,
        TokenKind::BangEqual => BinaryOperator::NotEqual,
        _ => return None,
    };
    Some(op)
}

/// Maps a prefix operator token to its unary operator.
#[must_use]
pub const fn unary_operator(kind: TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Minus => Some(UnaryOperator::Negate),
        TokenKind::Bang => Some(UnaryOperator::Not),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_operator_token() {
        assert_eq!(binary_operator(TokenKind::BangEqual), Some(BinaryOperator::NotEqual));
        assert_eq!(binary_operator(TokenKind::Slash), Some(BinaryOperator::Div));
        assert_eq!(binary_operator(TokenKind::And), None);
        assert_eq!(unary_operator(TokenKind::Minus), Some(UnaryOperator::Negate));
        assert_eq!(unary_operator(TokenKind::Plus), None);
    }
}
