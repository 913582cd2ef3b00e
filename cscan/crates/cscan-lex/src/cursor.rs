//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which owns the scanner's read
//! position. It is the only place where position, line and column change,
//! so every token start location is derived from here.

/// A cursor over source text with line/column tracking.
///
/// The cursor never moves backwards. Lines and columns are 1-based and
/// columns count characters, not bytes.
///
/// # Example
///
/// ```
/// use cscan_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
///
/// assert_eq!(cursor.peek(0), Some('i'));
/// assert_eq!(cursor.advance(), Some('i'));
/// assert_eq!(cursor.peek(0), Some('n'));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character `offset` characters ahead of the cursor.
    ///
    /// Returns `None` when that position lies past the end of the source.
    /// Does not move the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use cscan_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek(0), Some('a'));
    /// assert_eq!(cursor.peek(1), Some('b'));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        let rest = self.remaining();

        // Fast path for ASCII
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return Some(b as char);
            }
        }

        rest.chars().nth(offset)
    }

    /// Returns true if the character under the cursor equals `expected`.
    #[inline]
    pub fn at(&self, expected: char) -> bool {
        self.peek(0) == Some(expected)
    }

    /// Consumes and returns the character under the cursor.
    ///
    /// A newline moves to the first column of the next line; any other
    /// character moves one column right. At end of input this returns
    /// `None` and leaves the cursor where it is.
    ///
    /// # Example
    ///
    /// ```
    /// use cscan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// assert_eq!(cursor.column(), 2);
    /// cursor.advance();
    /// assert_eq!((cursor.line(), cursor.column()), (2, 1));
    /// ```
    pub fn advance(&mut self) -> Option<char> {
        let c = self.remaining().chars().next()?;
        self.position += c.len_utf8();

        if c == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }

        Some(c)
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek(0) {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text between byte offset `start` and the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use cscan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("while (1)");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "while");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the cursor to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
