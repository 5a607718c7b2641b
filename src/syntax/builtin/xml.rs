//! XML/HTML grammar
//!
//! Highlights element tags and comments. Attribute names and values inside
//! a tag are not highlighted separately yet; the whole tag gets one span.

use crate::syntax::grammar::Grammar;
use crate::syntax::rules::LexRule;
use crate::syntax::tokens::TokenType;

/// Create the XML grammar (also used for HTML)
pub fn xml_grammar() -> Grammar {
    let mut g = Grammar::new("XML");
    g.add_extension("xml");
    g.add_extension("html");

    // Opening, closing, and self-closing element tags
    if let Some(rule) = LexRule::new("element", r"</?[ \t]*\w+[^<>]*[ \t]*/?>", TokenType::Tag) {
        g.add_rule(rule);
    }

    if let Some(rule) = LexRule::new("comment", r"<!--[^<>]+-->", TokenType::Comment) {
        g.add_rule(rule);
    }

    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Span;

    #[test]
    fn test_tags_and_text() {
        let g = xml_grammar();
        let spans = g.highlight(r#"<note a="1">hi</note>"#);
        assert_eq!(
            spans,
            vec![
                Span::new(0, 12, TokenType::Tag),  // <note a="1">
                Span::gap(12, 14),                 // hi
                Span::new(14, 21, TokenType::Tag), // </note>
            ]
        );
    }

    #[test]
    fn test_self_closing_tag() {
        let g = xml_grammar();
        let spans = g.highlight("<br/>");
        assert_eq!(spans, vec![Span::new(0, 5, TokenType::Tag)]);
    }

    #[test]
    fn test_comment() {
        let g = xml_grammar();
        let spans = g.highlight("<!-- c -->x");
        assert_eq!(spans[0], Span::new(0, 10, TokenType::Comment));
        assert_eq!(spans[1], Span::gap(10, 11));
    }

    #[test]
    fn test_prolog_is_not_a_tag() {
        let g = xml_grammar();
        let spans = g.highlight("<?xml?>");
        assert_eq!(spans, vec![Span::gap(0, 7)]);
    }
}
