//! Java grammar

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::LexRule;
use crate::syntax::tokens::TokenType;

/// Create the Java grammar
pub fn java_grammar() -> Grammar {
    let mut g = Grammar::new("Java");
    g.add_extension("java");

    let keywords = r"\b(abstract|assert|boolean|break|byte|case|catch|char|class|const|continue|default|do|double|else|enum|extends|final|finally|float|for|goto|if|implements|import|instanceof|int|interface|long|native|new|package|private|protected|public|return|short|static|strictfp|super|switch|synchronized|this|throw|throws|transient|try|void|volatile|while)\b";
    if let Some(rule) = LexRule::new("keyword", keywords, TokenType::Keyword) {
        g.add_rule(rule);
    }

    // Double-quoted strings; backslash escapes consume the next character
    // so an escaped quote cannot end the literal.
    if let Some(rule) = LexRule::new("string", r#""[^"\\]*(\\.[^"\\]*)*""#, TokenType::String) {
        g.add_rule(rule);
    }

    // Decimal integer literals
    if let Some(rule) = LexRule::new("number", r"\b\d+\b", TokenType::Number) {
        g.add_rule(rule);
    }

    if let Some(rule) = LexRule::new("line_comment", r"//[^\n]*", TokenType::Comment) {
        g.add_rule(rule);
    }

    if let Some(rule) = LexRule::new(
        "block_comment",
        r"/\*[^*]*\*+(?:[^*/][^*]*\*+)*/",
        TokenType::Comment,
    ) {
        g.add_rule(rule);
    }

    if let Some(rule) = LexRule::new("annotation", r"@[\w]+", TokenType::Annotation) {
        g.add_rule(rule);
    }

    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Span;

    #[test]
    fn test_comment_keyword_number_sequence() {
        let g = java_grammar();
        let spans = g.highlight("// hi\nint x = 5;");
        assert_eq!(
            spans,
            vec![
                Span::new(0, 5, TokenType::Comment),  // "// hi"
                Span::gap(5, 6),                      // "\n"
                Span::new(6, 9, TokenType::Keyword),  // "int"
                Span::gap(9, 14),                     // " x = "
                Span::new(14, 15, TokenType::Number), // "5"
                Span::gap(15, 16),                    // ";"
            ]
        );
    }

    #[test]
    fn test_keyword_inside_string_stays_string() {
        let g = java_grammar();
        let spans = g.highlight(r#"x = "if x";"#);
        assert_eq!(spans[1], Span::new(4, 10, TokenType::String));
        assert!(!spans.iter().any(|s| s.token == Some(TokenType::Keyword)));
    }

    #[test]
    fn test_escaped_quote_does_not_end_string() {
        let g = java_grammar();
        let text = r#""a\"b""#;
        let spans = g.highlight(text);
        assert_eq!(spans, vec![Span::new(0, text.len(), TokenType::String)]);
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let g = java_grammar();
        let spans = g.highlight("/* a\nb */ int");
        assert_eq!(spans[0], Span::new(0, 9, TokenType::Comment));
        assert_eq!(spans[2], Span::new(10, 13, TokenType::Keyword));
    }

    #[test]
    fn test_annotation() {
        let g = java_grammar();
        let spans = g.highlight("@Override\npublic");
        assert_eq!(spans[0], Span::new(0, 9, TokenType::Annotation));
        assert_eq!(spans[2], Span::new(10, 16, TokenType::Keyword));
    }

    #[test]
    fn test_number_inside_identifier_not_matched() {
        let g = java_grammar();
        let spans = g.highlight("utf8name");
        assert_eq!(spans, vec![Span::gap(0, 8)]);
    }
}
