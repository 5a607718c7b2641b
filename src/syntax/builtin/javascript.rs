//! JavaScript grammar
//!
//! Like the CSS grammar, this only claims the extension for dispatch; no
//! tokenization rules are defined yet.

use crate::syntax::grammar::Grammar;

/// Create the JavaScript grammar
pub fn javascript_grammar() -> Grammar {
    let mut g = Grammar::new("JavaScript");
    g.add_extension("js");
    g
}
