//! CSS grammar
//!
//! The grammar claims the extension so dispatch works, but no tokenization
//! rules are defined yet: stylesheets render as plain text.

use crate::syntax::grammar::Grammar;

/// Create the CSS grammar
pub fn css_grammar() -> Grammar {
    let mut g = Grammar::new("CSS");
    g.add_extension("css");
    g
}
