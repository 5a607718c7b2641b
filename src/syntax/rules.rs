//! Lexical rules for syntax highlighting
//!
//! A rule pairs a regex pattern with the token kind it produces. Rules are
//! tried in declaration order: when two rules match at the same position,
//! the one declared first wins.

use regex::Regex;

use super::tokens::TokenType;

/// A single lexical rule
pub struct LexRule {
    /// Name for debugging
    pub name: &'static str,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Token kind assigned to matches
    pub token: TokenType,
}

impl LexRule {
    /// Create a new rule; None if the pattern does not compile
    pub fn new(name: &'static str, pattern: &str, token: TokenType) -> Option<Self> {
        Regex::new(pattern).ok().map(|pattern| Self {
            name,
            pattern,
            token,
        })
    }

    /// Find the earliest non-empty match at or after `start`, as absolute
    /// byte offsets. Zero-length matches are skipped so a scan over the
    /// text cannot stall.
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        self.pattern
            .find_iter(&text[start..])
            .find(|m| m.start() != m.end())
            .map(|m| (start + m.start(), start + m.end()))
    }
}
