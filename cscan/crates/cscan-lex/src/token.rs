//! Token definitions.
//!
//! A [`Token`] is a classified, positioned slice of source text. The kind set
//! is closed ([`TokenKind`]) and the reserved word and operator tables are
//! fixed for the lifetime of the process.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Reserved words, matched exactly and case-sensitively.
pub const KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return",
    "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned",
    "void", "volatile", "while", "class", "namespace", "public", "private", "protected",
    "virtual", "bool", "true", "false",
];

/// Operators made of two characters. Any other operator pair splits.
pub const TWO_CHAR_OPERATORS: &[&str] = &["==", "!=", "<=", ">=", "++", "--", "&&", "||", "->", "::"];

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Returns true if `text` is a reserved word.
///
/// # Example
///
/// ```
/// use cscan_lex::token::is_keyword;
///
/// assert!(is_keyword("while"));
/// assert!(is_keyword("namespace"));
/// assert!(!is_keyword("While"));
/// assert!(!is_keyword("main"));
/// ```
pub fn is_keyword(text: &str) -> bool {
    KEYWORD_SET.contains(text)
}

/// Returns true if `first` followed by `second` forms a two-character operator.
///
/// # Example
///
/// ```
/// use cscan_lex::token::is_two_char_operator;
///
/// assert!(is_two_char_operator('-', '>'));
/// assert!(!is_two_char_operator('+', '='));
/// ```
pub fn is_two_char_operator(first: char, second: char) -> bool {
    matches!(
        (first, second),
        ('=', '=')
            | ('!', '=')
            | ('<', '=')
            | ('>', '=')
            | ('+', '+')
            | ('-', '-')
            | ('&', '&')
            | ('|', '|')
            | ('-', '>')
            | (':', ':')
    )
}

/// The category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// A reserved word from [`KEYWORDS`].
    Keyword,
    /// A name that is not a reserved word.
    Identifier,
    /// A run of digits and dots.
    Number,
    /// One of `+ - * / = < > ! & | :` or a pair from [`TWO_CHAR_OPERATORS`].
    Operator,
    /// One of `; , ( ) { } [ ]`.
    Punctuation,
    /// A double-quoted string, quotes removed.
    StringLiteral,
    /// End of input. Always the last token.
    EndOfFile,
    /// A single character no other class accepts.
    Unknown,
}

impl TokenKind {
    /// Returns the upper-case label used in the human-readable listing.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::StringLiteral => "STRING",
            TokenKind::EndOfFile => "EOF",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified unit of source text with the position where it starts.
///
/// Tokens are only produced by the [`Lexer`](crate::Lexer) and cannot be
/// modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    kind: TokenKind,
    value: String,
    line: u32,
    column: u32,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, value: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    /// The token's category.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The recognized text. Empty for [`TokenKind::EndOfFile`].
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Line where the token starts (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column where the token starts (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns true for the end-of-file marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

/// Renders `[TYPE] 'value' (line L, col C)`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] '{}' (line {}, col {})",
            self.kind, self.value, self.line, self.column
        )
    }
}
