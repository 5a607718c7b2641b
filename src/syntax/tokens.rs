//! Token kinds recognized by the highlight rules

use super::style::{Color, Style};

/// Semantic token kinds for syntax highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Source code comments (line or block)
    Comment,
    /// String literals
    String,
    /// Numeric literals
    Number,
    /// Language keywords
    Keyword,
    /// Annotations (@Override and friends)
    Annotation,
    /// Markup element tags
    Tag,
}

impl TokenType {
    /// Get the default terminal style for this token kind
    pub fn default_style(&self) -> Style {
        match self {
            TokenType::Comment => Style::fg(Color::BrightBlack).with_italic(),
            TokenType::String => Style::fg(Color::Green),
            TokenType::Number => Style::fg(Color::Cyan),
            TokenType::Keyword => Style::fg(Color::Magenta).with_bold(),
            TokenType::Annotation => Style::fg(Color::BrightBlue),
            TokenType::Tag => Style::fg(Color::Blue),
        }
    }

}
