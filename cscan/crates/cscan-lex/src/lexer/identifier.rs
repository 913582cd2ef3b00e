//! Identifier and keyword lexing.

use crate::classify::is_ident_continue;
use crate::token::{is_keyword, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes letters, digits and underscores. The dispatcher guarantees
    /// the first character is a letter or underscore. The text is then
    /// looked up in the keyword table.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        let kind = if is_keyword(text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        self.make_token(kind, text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind, KEYWORDS};
    use crate::Lexer;

    fn lex_ident(source: &str) -> Token {
        Lexer::new(source).lex_identifier()
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_ident("foo");
        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(token.value(), "foo");
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        assert_eq!(lex_ident("foo_bar_123").value(), "foo_bar_123");
        assert_eq!(lex_ident("_private").value(), "_private");
        assert_eq!(lex_ident("_").value(), "_");
    }

    #[test]
    fn test_identifier_stops_at_non_word() {
        assert_eq!(lex_ident("cout<<").value(), "cout");
        assert_eq!(lex_ident("a.b").value(), "a");
        assert_eq!(lex_ident("x-1").value(), "x");
    }

    #[test]
    fn test_all_keywords() {
        for kw in KEYWORDS {
            let token = lex_ident(kw);
            assert_eq!(token.kind(), TokenKind::Keyword, "{}", kw);
            assert_eq!(token.value(), *kw);
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_ident("integer").kind(), TokenKind::Identifier);
        assert_eq!(lex_ident("int_").kind(), TokenKind::Identifier);
        assert_eq!(lex_ident("iff").kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_keyword_case_sensitive() {
        assert_eq!(lex_ident("Int").kind(), TokenKind::Identifier);
        assert_eq!(lex_ident("TRUE").kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_non_ascii_ends_identifier() {
        let tokens = Lexer::new("caféx").tokenize();
        assert_eq!(tokens[0].value(), "caf");
        assert_eq!(tokens[1].kind(), TokenKind::Unknown);
        assert_eq!(tokens[1].value(), "é");
        assert_eq!(tokens[2].value(), "x");
        assert_eq!(tokens[2].column(), 5);
    }
}
