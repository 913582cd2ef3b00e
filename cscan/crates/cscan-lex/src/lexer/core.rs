//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, the per-token dispatch and the
//! `tokenize` loop that materializes the whole token sequence.

use tracing::debug;

use crate::classify::{is_ident_start, is_operator_start, is_punctuation};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for C-family source text.
///
/// A lexer scans one source buffer in a single forward pass. It owns its
/// cursor, so a new lexer is needed for every input.
///
/// # Example
///
/// ```
/// use cscan_lex::{Lexer, TokenKind};
///
/// let tokens = Lexer::new("return 0;").tokenize();
///
/// assert_eq!(tokens[0].kind(), TokenKind::Keyword);
/// assert_eq!(tokens[1].value(), "0");
/// assert!(tokens.last().unwrap().is_eof());
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Column number where the current token starts (1-based).
    pub(crate) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Scans the whole source and returns every token in source order.
    ///
    /// The result always ends with exactly one [`TokenKind::EndOfFile`]
    /// token, positioned where scanning stopped.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens: Vec<Token> = self.by_ref().collect();
        tokens.push(self.next_token());

        debug!(
            tokens = tokens.len(),
            lines = self.cursor.line(),
            "tokenized source"
        );
        tokens
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and comments, then dispatches on the current
    /// character. Once the input is exhausted every call returns an
    /// end-of-file token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let Some(c) = self.cursor.peek(0) else {
            return self.make_token(TokenKind::EndOfFile, String::new());
        };

        match c {
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            '"' => self.lex_string(),
            c if is_punctuation(c) => self.lex_punctuation(),
            c if is_operator_start(c) => self.lex_operator(),
            _ => self.lex_unknown(),
        }
    }

    /// Builds a token of `kind` at the current token start.
    pub(crate) fn make_token(&self, kind: TokenKind, value: String) -> Token {
        Token::new(kind, value, self.token_start_line, self.token_start_column)
    }

    /// Builds a token whose value is the source text consumed since the
    /// token start.
    pub(crate) fn text_token(&self, kind: TokenKind) -> Token {
        self.make_token(kind, self.cursor.slice_from(self.token_start).to_owned())
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Yields every token up to, but not including, the end-of-file marker.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
