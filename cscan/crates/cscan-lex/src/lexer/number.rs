//! Number lexing.

use crate::classify::is_number_continue;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number.
    ///
    /// Consumes every following digit and `.` as one token. The text is not
    /// validated or converted: `1.2.3` is a single number, and there are no
    /// exponents, suffixes or radix prefixes.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(is_number_continue);
        self.text_token(TokenKind::Number)
    }
}
