//! Syntax highlighting
//!
//! This module tokenizes file contents with per-language regex rules and
//! produces an ordered, gap-filled sequence of style spans covering the
//! whole text. Rendering decides what a token kind looks like; the engine
//! only labels ranges.

mod style;
mod tokens;
mod rules;
mod grammar;
mod builtin;

pub use style::{Color, Span, Style};
pub use tokens::TokenType;
pub use rules::LexRule;
pub use grammar::{Grammar, GrammarSet};
