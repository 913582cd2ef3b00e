//! Whitespace and comment skipping.

use tracing::trace;

use crate::classify::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Whitespace is skipped again after every comment, so any mix of the
    /// two is consumed before the next token starts.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.cursor.eat_while(is_whitespace);

            match (self.cursor.peek(0), self.cursor.peek(1)) {
                (Some('/'), Some('/')) => self.skip_line_comment(),
                (Some('/'), Some('*')) => self.skip_block_comment(),
                _ => return,
            }
        }
    }

    /// Skips a line comment up to, but not including, the newline.
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        self.cursor.eat_while(|c| c != '\n');
    }

    /// Skips a block comment through the first `*/`.
    ///
    /// Block comments do not nest. A comment that is never closed runs to
    /// the end of the input.
    fn skip_block_comment(&mut self) {
        let (line, column) = (self.cursor.line(), self.cursor.column());
        self.cursor.advance();
        self.cursor.advance();

        loop {
            match (self.cursor.peek(0), self.cursor.peek(1)) {
                (Some('*'), Some('/')) => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return;
                },
                (None, _) => {
                    trace!(line, column, "unterminated block comment runs to end of input");
                    return;
                },
                _ => {
                    self.cursor.advance();
                },
            }
        }
    }
}
