//! Built-in language grammars

mod java;
mod xml;
mod css;
mod javascript;

use super::grammar::Grammar;

/// Get all built-in grammars
pub fn all_grammars() -> Vec<Grammar> {
    vec![
        java::java_grammar(),
        xml::xml_grammar(),
        css::css_grammar(),
        javascript::javascript_grammar(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Span;

    #[test]
    fn test_css_and_js_are_inert() {
        // These grammars claim their extensions but define no rules, so
        // everything comes back as a single unstyled span.
        for grammar in [css::css_grammar(), javascript::javascript_grammar()] {
            let spans = grammar.highlight("body { color: red; } // 123");
            assert_eq!(spans, vec![Span::gap(0, 27)]);
        }
    }
}
