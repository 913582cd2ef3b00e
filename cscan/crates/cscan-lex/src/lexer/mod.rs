//! Lexer module.
//!
//! The lexer is split by token class:
//! - `core` - Lexer struct, dispatch and the tokenize loop
//! - `comment` - whitespace and comment skipping
//! - `identifier` - identifier and keyword lexing
//! - `number` - number lexing
//! - `string` - string literal lexing
//! - `operator` - operator, punctuation and unknown characters

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
