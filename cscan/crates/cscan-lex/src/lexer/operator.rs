//! Operator, punctuation and unknown character lexing.

use tracing::trace;

use crate::token::{is_two_char_operator, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator.
    ///
    /// Takes two characters when the current and next character form a pair
    /// from the two-character table, otherwise takes one. Pairs outside the
    /// table, such as `+=` or `<<`, become two separate operators.
    pub(crate) fn lex_operator(&mut self) -> Token {
        let is_pair = match (self.cursor.peek(0), self.cursor.peek(1)) {
            (Some(first), Some(second)) => is_two_char_operator(first, second),
            _ => false,
        };

        self.cursor.advance();
        if is_pair {
            self.cursor.advance();
        }

        self.text_token(TokenKind::Operator)
    }

    /// Lexes one punctuation character.
    pub(crate) fn lex_punctuation(&mut self) -> Token {
        self.cursor.advance();
        self.text_token(TokenKind::Punctuation)
    }

    /// Lexes one character no other rule accepts.
    pub(crate) fn lex_unknown(&mut self) -> Token {
        self.cursor.advance();
        let token = self.text_token(TokenKind::Unknown);
        trace!(
            line = token.line(),
            column = token.column(),
            value = token.value(),
            "unknown character"
        );
        token
    }
}
