//! Terminal rendering
//!
//! Renders the entry tree and highlighted content to any `Write` target
//! using ANSI styling. Icons and colors are display-time decoration only;
//! tree labels and spans stay logical.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use unicode_width::UnicodeWidthChar;

use crate::config::Config;
use crate::syntax::{Color, Span, Style};
use crate::tree::{NodeId, PathTree};

/// Rendering settings
pub struct Renderer {
    /// Colorize output
    pub color: bool,
    /// Prefix tree labels with file-type icons
    pub show_icons: bool,
    /// Tab width for content display
    pub tab_width: usize,
}

impl Renderer {
    pub fn from_config(config: &Config) -> Self {
        Self {
            color: config.color,
            show_icons: config.show_icons,
            tab_width: config.tab_width.max(1),
        }
    }

    /// Print the whole tree, indented, children in insertion order
    pub fn render_tree<W: Write>(&self, out: &mut W, tree: &PathTree) -> io::Result<()> {
        self.render_subtree(out, tree, tree.root(), 0)?;
        out.flush()
    }

    fn render_subtree<W: Write>(
        &self,
        out: &mut W,
        tree: &PathTree,
        node: NodeId,
        depth: usize,
    ) -> io::Result<()> {
        queue!(
            out,
            Print(format!(
                "{}{}{}\n",
                "  ".repeat(depth),
                self.icon(tree, node),
                tree.label(node)
            ))
        )?;
        for &child in tree.children(node) {
            self.render_subtree(out, tree, child, depth + 1)?;
        }
        Ok(())
    }

    /// Print a matched node in context: the expanded ancestor chain down
    /// to the match, with a cursor position marker
    pub fn render_match_context<W: Write>(
        &self,
        out: &mut W,
        tree: &PathTree,
        node: NodeId,
        index: usize,
        count: usize,
    ) -> io::Result<()> {
        let mut chain = tree.ancestors(node);
        chain.reverse();

        queue!(
            out,
            Print(format!(
                "{}{}\n",
                self.icon(tree, tree.root()),
                tree.label(tree.root())
            ))
        )?;
        let mut depth = 1;
        for &ancestor in &chain {
            queue!(
                out,
                Print(format!(
                    "{}{}{}\n",
                    "  ".repeat(depth),
                    self.icon(tree, ancestor),
                    tree.label(ancestor)
                ))
            )?;
            depth += 1;
        }
        queue!(
            out,
            Print(format!(
                "{}{}{}  ({}/{})\n",
                "  ".repeat(depth),
                self.icon(tree, node),
                tree.label(node),
                index + 1,
                count
            ))
        )?;
        out.flush()
    }

    /// Print highlighted content with a line-number gutter. Spans are
    /// expected to partition the text, as the highlight engine produces
    /// them; tabs expand to the configured width by display column.
    pub fn render_content<W: Write>(
        &self,
        out: &mut W,
        text: &str,
        spans: &[Span],
    ) -> io::Result<()> {
        let line_count = text.lines().count().max(1);
        let gutter_width = line_count.to_string().len();

        let mut line_no = 1usize;
        let mut col = 0usize;
        let mut at_line_start = true;

        for span in spans {
            let style = span.style();
            let mut style_pending = true;
            for ch in text[span.start..span.end].chars() {
                if at_line_start {
                    self.write_gutter(out, line_no, gutter_width)?;
                    at_line_start = false;
                    col = 0;
                    style_pending = true;
                }
                match ch {
                    '\n' => {
                        self.reset_style(out, style)?;
                        style_pending = true;
                        queue!(out, Print('\n'))?;
                        line_no += 1;
                        at_line_start = true;
                    }
                    '\t' => {
                        let pad = self.tab_width - (col % self.tab_width);
                        for _ in 0..pad {
                            queue!(out, Print(' '))?;
                        }
                        col += pad;
                    }
                    _ => {
                        if style_pending {
                            self.apply_style(out, style)?;
                            style_pending = false;
                        }
                        queue!(out, Print(ch))?;
                        col += UnicodeWidthChar::width(ch).unwrap_or(1);
                    }
                }
            }
            self.reset_style(out, style)?;
        }

        if !at_line_start {
            queue!(out, Print('\n'))?;
        }
        out.flush()
    }

    fn write_gutter<W: Write>(&self, out: &mut W, line_no: usize, width: usize) -> io::Result<()> {
        if self.color {
            queue!(out, SetAttribute(Attribute::Dim))?;
        }
        queue!(out, Print(format!("{:>width$} │ ", line_no, width = width)))?;
        if self.color {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }

    fn apply_style<W: Write>(&self, out: &mut W, style: Style) -> io::Result<()> {
        if !self.color || style.is_default() {
            return Ok(());
        }
        if style.fg != Color::Default {
            queue!(out, SetForegroundColor(term_color(style.fg)))?;
        }
        if style.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(out, SetAttribute(Attribute::Italic))?;
        }
        Ok(())
    }

    fn reset_style<W: Write>(&self, out: &mut W, style: Style) -> io::Result<()> {
        if !self.color || style.is_default() {
            return Ok(());
        }
        queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    fn icon(&self, tree: &PathTree, node: NodeId) -> &'static str {
        if !self.show_icons {
            return "";
        }
        if node == tree.root() {
            return "📦 ";
        }
        if !tree.children(node).is_empty() {
            return "📁 ";
        }
        let label = tree.label(node).to_lowercase();
        if label.ends_with(".class") {
            "🔹 "
        } else if label.ends_with(".java") {
            "☕ "
        } else if label.ends_with(".xml") || label.ends_with(".html") {
            "🔶 "
        } else if label.ends_with(".jar") {
            "📦 "
        } else {
            "📄 "
        }
    }
}

/// Map the palette onto crossterm's ANSI colors
fn term_color(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as Term;
    match color {
        Color::Default => Term::Reset,
        Color::Black => Term::Black,
        Color::Red => Term::DarkRed,
        Color::Green => Term::DarkGreen,
        Color::Yellow => Term::DarkYellow,
        Color::Blue => Term::DarkBlue,
        Color::Magenta => Term::DarkMagenta,
        Color::Cyan => Term::DarkCyan,
        Color::White => Term::Grey,
        Color::BrightBlack => Term::DarkGrey,
        Color::BrightRed => Term::Red,
        Color::BrightGreen => Term::Green,
        Color::BrightYellow => Term::Yellow,
        Color::BrightBlue => Term::Blue,
        Color::BrightMagenta => Term::Magenta,
        Color::BrightCyan => Term::Cyan,
        Color::BrightWhite => Term::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenType;

    fn plain_renderer() -> Renderer {
        Renderer {
            color: false,
            show_icons: false,
            tab_width: 4,
        }
    }

    fn render_tree_to_string(renderer: &Renderer, tree: &PathTree) -> String {
        let mut out = Vec::new();
        renderer.render_tree(&mut out, tree).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tree_rendering_plain() {
        let mut tree = PathTree::new("app.jar");
        tree.insert("com/app/Main.class");
        tree.insert("META-INF/MANIFEST.MF");

        let text = render_tree_to_string(&plain_renderer(), &tree);
        assert_eq!(
            text,
            "app.jar\n  com\n    app\n      Main.class\n  META-INF\n    MANIFEST.MF\n"
        );
    }

    #[test]
    fn test_tree_rendering_icons() {
        let mut tree = PathTree::new("app.jar");
        tree.insert("com/Main.class");

        let renderer = Renderer {
            show_icons: true,
            ..plain_renderer()
        };
        let text = render_tree_to_string(&renderer, &tree);
        assert!(text.starts_with("📦 app.jar\n"));
        assert!(text.contains("📁 com\n"));
        assert!(text.contains("🔹 Main.class\n"));
    }

    #[test]
    fn test_content_rendering_gutter_and_tabs() {
        let renderer = plain_renderer();
        let text = "a\n\tb";
        let spans = vec![Span::gap(0, text.len())];
        let mut out = Vec::new();
        renderer.render_content(&mut out, text, &spans).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 │ a\n2 │     b\n");
    }

    #[test]
    fn test_content_rendering_without_color_is_plain() {
        let renderer = plain_renderer();
        let text = "int x";
        let spans = vec![Span::new(0, 3, TokenType::Keyword), Span::gap(3, 5)];
        let mut out = Vec::new();
        renderer.render_content(&mut out, text, &spans).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 │ int x\n");
    }

    #[test]
    fn test_match_context() {
        let mut tree = PathTree::new("app.jar");
        let node = tree.insert("com/app/Main.class").unwrap();
        let mut out = Vec::new();
        plain_renderer()
            .render_match_context(&mut out, &tree, node, 0, 2)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "app.jar\n  com\n    app\n      Main.class  (1/2)\n"
        );
    }
}
