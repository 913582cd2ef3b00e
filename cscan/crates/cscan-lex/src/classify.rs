//! Character classes used by the lexer dispatch.
//!
//! All classes are ASCII-only. Any character outside them, including every
//! non-ASCII character, ends up as an `Unknown` token.

/// Checks if a character is skippable whitespace.
///
/// This is the ASCII `isspace` set: space, tab, newline, vertical tab,
/// form feed and carriage return.
///
/// # Example
///
/// ```
/// use cscan_lex::classify::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\x0B'));
/// assert!(!is_whitespace('\u{A0}'));  // no-break space is not ASCII
/// ```
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Checks if a character can start an identifier or keyword.
///
/// # Example
///
/// ```
/// use cscan_lex::classify::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier or keyword.
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Checks if a character belongs to a number token.
///
/// Digits and `.` are accepted in any arrangement.
pub fn is_number_continue(c: char) -> bool {
    c == '.' || c.is_ascii_digit()
}

/// Checks if a character is single-character punctuation: `; , ( ) { } [ ]`.
pub fn is_punctuation(c: char) -> bool {
    matches!(c, ';' | ',' | '(' | ')' | '{' | '}' | '[' | ']')
}

/// Checks if a character starts an operator: `+ - * / = < > ! & | :`.
pub fn is_operator_start(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!' | '&' | '|' | ':'
    )
}
