//! cscan-lex - Lexical Analyzer for C-family source text
//!
//! This crate turns source text into a finite, ordered list of classified
//! tokens, each tagged with the line and column where it starts. It is the
//! scanning stage only: there is no parser and no preprocessor.
//!
//! # Example Usage
//!
//! ```
//! use cscan_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("int x = 42;");
//!
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Keyword,
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::Number,
//!         TokenKind::Punctuation,
//!         TokenKind::EndOfFile,
//!     ]
//! );
//! assert_eq!(tokens[0].to_string(), "[KEYWORD] 'int' (line 1, col 1)");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type, token kinds, keyword and operator tables
//! - [`lexer`] - Lexer implementation
//! - [`cursor`] - Character cursor with line/column tracking
//! - [`classify`] - ASCII character classes used for dispatch
//!
//! # Token Categories
//!
//! - **Keywords**: the C keywords plus `class`, `namespace`, `public`,
//!   `private`, `protected`, `virtual`, `bool`, `true`, `false`
//! - **Identifiers**: `[a-zA-Z_][a-zA-Z0-9_]*` that are not keywords
//! - **Numbers**: `[0-9][0-9.]*`, kept as text
//! - **Strings**: `"..."`; a backslash is dropped and the next character kept
//! - **Operators**: `+ - * / = < > ! & | :` and
//!   `== != <= >= ++ -- && || -> ::`
//! - **Punctuation**: `; , ( ) { } [ ]`
//! - **Unknown**: any other single character
//! - **EndOfFile**: always the last token
//!
//! Lexing never fails. Unterminated comments and strings and unrecognized
//! characters are absorbed as described above.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{is_keyword, is_two_char_operator, Token, TokenKind, KEYWORDS, TWO_CHAR_OPERATORS};

/// Tokenizes `source` with a fresh [`Lexer`].
///
/// The returned list always ends with exactly one
/// [`TokenKind::EndOfFile`] token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
