//! Style types for text rendering

use super::tokens::TokenType;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A half-open byte range of text tagged with the token kind that matched.
///
/// The highlight engine emits spans as a contiguous partition of the input:
/// every byte of the text belongs to exactly one span, in increasing order.
/// A span with no token is an unstyled gap between matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Token kind, or None for an unstyled gap
    pub token: Option<TokenType>,
}

impl Span {
    /// Create a styled span
    pub fn new(start: usize, end: usize, token: TokenType) -> Self {
        Self {
            start,
            end,
            token: Some(token),
        }
    }

    /// Create an unstyled gap span
    pub fn gap(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            token: None,
        }
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Style to render this span with
    pub fn style(&self) -> Style {
        match self.token {
            Some(token) => token.default_style(),
            None => Style::default(),
        }
    }
}
