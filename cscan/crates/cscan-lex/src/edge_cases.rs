//! Edge case tests for cscan-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        tokenize(source)
    }

    fn values(source: &str) -> Vec<String> {
        lex_all(source).iter().map(|t| t.value().to_string()).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let t = lex_all("");
        assert_eq!(t.len(), 1);
        assert!(t[0].is_eof());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind(), TokenKind::Identifier);
        assert_eq!(t[0].value(), "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("int {} = 1;", name));
        assert_eq!(t[1].value(), name);
        assert_eq!(t[2].column(), 10006);
    }

    #[test]
    fn test_edge_adjacent_tokens_without_spaces() {
        assert_eq!(
            values("if(x>=1){y++;}"),
            ["if", "(", "x", ">=", "1", ")", "{", "y", "++", ";", "}", ""]
        );
    }

    #[test]
    fn test_edge_number_then_identifier() {
        let t = lex_all("123abc");
        assert_eq!(t[0].value(), "123");
        assert_eq!(t[1].value(), "abc");
        assert_eq!(t[1].kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_edge_slash_before_star_in_expression() {
        // `a /*b*/ c` hides b; `a / *b` does not
        assert_eq!(values("a /*b*/ c"), ["a", "c", ""]);
        assert_eq!(values("a / *b"), ["a", "/", "*", "b", ""]);
    }

    #[test]
    fn test_edge_comment_directly_after_token() {
        assert_eq!(values("x//c\ny"), ["x", "y", ""]);
        assert_eq!(values("x/*c*/y"), ["x", "y", ""]);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("int a;\r\nint b;\r\n");
        assert_eq!(t[3].value(), "int");
        assert_eq!((t[3].line(), t[3].column()), (2, 1));
        let eof = t.last().unwrap();
        assert_eq!((eof.line(), eof.column()), (3, 1));
    }

    #[test]
    fn test_edge_line_comment_with_crlf() {
        let t = lex_all("// note\r\nx");
        assert_eq!(t[0].value(), "x");
        assert_eq!(t[0].line(), 2);
    }

    #[test]
    fn test_edge_string_with_escaped_newline_char() {
        let t = lex_all("\"a\\nb\"");
        assert_eq!(t[0].kind(), TokenKind::StringLiteral);
        assert_eq!(t[0].value(), "anb");
    }

    #[test]
    fn test_edge_unterminated_string_swallows_rest() {
        let t = lex_all("x = \"abc; y = 2;");
        assert_eq!(t.len(), 4);
        assert_eq!(t[2].value(), "abc; y = 2;");
    }

    #[test]
    fn test_edge_unterminated_comment_after_code() {
        assert_eq!(values("int a; /* oops"), ["int", "a", ";", ""]);
    }

    #[test]
    fn test_edge_tab_counts_as_one_column() {
        let t = lex_all("\tx");
        assert_eq!(t[0].column(), 2);
    }

    #[test]
    fn test_edge_non_ascii_column_counting() {
        let t = lex_all("\"ü\" y");
        assert_eq!(t[0].value(), "ü");
        assert_eq!(t[1].column(), 5);
    }

    #[test]
    fn test_edge_non_ascii_whitespace_is_unknown() {
        let t = lex_all("a\u{00A0}b");
        assert_eq!(t[1].kind(), TokenKind::Unknown);
        assert_eq!(t[1].value(), "\u{00A0}");
    }

    #[test]
    fn test_edge_many_tokens_one_eof() {
        let source = "x + 1; ".repeat(1000);
        let t = lex_all(&source);
        assert_eq!(t.len(), 4001);
        assert_eq!(t.iter().filter(|t| t.is_eof()).count(), 1);
    }
}
