//! String literal lexing.

use tracing::trace;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a double-quoted string literal.
    ///
    /// The quotes are not part of the value. A backslash is dropped and the
    /// character after it is kept as written, so `\n` yields `n` and `\"`
    /// yields `"`. Escapes are not otherwise interpreted. A string that
    /// reaches end of input keeps whatever was read so far.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.cursor.advance();

        let mut content = String::new();

        loop {
            match self.cursor.advance() {
                Some('"') => break,
                Some('\\') => {
                    if let Some(escaped) = self.cursor.advance() {
                        content.push(escaped);
                    }
                },
                Some(c) => content.push(c),
                None => {
                    trace!(
                        line = self.token_start_line,
                        column = self.token_start_column,
                        "unterminated string literal"
                    );
                    break;
                },
            }
        }

        self.make_token(TokenKind::StringLiteral, content)
    }
}
