//! Language grammars and the span-producing scan
//!
//! A grammar is an ordered set of lexical rules plus the file extensions it
//! claims. Highlighting scans the whole text once, left to right: at each
//! step the earliest rule match wins, declaration order breaking ties at
//! the same start position. The stretches between matches come out as
//! unstyled gap spans, so the result always partitions the input.

use std::collections::HashMap;
use std::path::Path;

use super::rules::LexRule;
use super::style::Span;
use super::tokens::TokenType;

/// A complete language definition for syntax highlighting
pub struct Grammar {
    /// Language name (e.g., "Java", "XML")
    pub name: &'static str,
    /// File extensions this grammar claims
    extensions: Vec<&'static str>,
    /// Lexical rules in priority (declaration) order
    rules: Vec<LexRule>,
}

impl Grammar {
    /// Create a new empty grammar
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            extensions: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &'static str) {
        self.extensions.push(ext);
    }

    /// Add a lexical rule at the end of the priority order
    pub fn add_rule(&mut self, rule: LexRule) {
        self.rules.push(rule);
    }

    /// Extensions this grammar claims
    pub fn extensions(&self) -> &[&'static str] {
        &self.extensions
    }

    /// Tokenize `text` into an ordered, gap-filled sequence of spans.
    ///
    /// The returned spans cover `[0, text.len())` exactly once, in
    /// increasing order. Empty text yields an empty list. A grammar with
    /// no rules yields a single gap span.
    pub fn highlight(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        if text.is_empty() {
            return spans;
        }

        let mut last_end = 0;
        while last_end < text.len() {
            // Earliest match at or after the cursor; the first declared
            // rule wins ties at the same start position.
            let mut best: Option<(usize, usize, TokenType)> = None;
            for rule in &self.rules {
                if let Some((start, end)) = rule.find_at(text, last_end) {
                    let replace = match best {
                        Some((best_start, _, _)) => start < best_start,
                        None => true,
                    };
                    if replace {
                        best = Some((start, end, rule.token));
                        if start == last_end {
                            // Nothing later in the rule list can beat a
                            // match flush against the cursor.
                            break;
                        }
                    }
                }
            }

            match best {
                Some((start, end, token)) => {
                    if start > last_end {
                        spans.push(Span::gap(last_end, start));
                    }
                    spans.push(Span::new(start, end, token));
                    last_end = end;
                }
                None => break,
            }
        }

        if last_end < text.len() {
            spans.push(Span::gap(last_end, text.len()));
        }
        spans
    }
}

/// Unstyled spans for text with no applicable grammar
fn plain_spans(text: &str) -> Vec<Span> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Span::gap(0, text.len())]
    }
}

/// Registry of grammars, dispatching on file extension
pub struct GrammarSet {
    grammars: Vec<Grammar>,
    /// Lowercase extension to index into `grammars`
    extension_map: HashMap<String, usize>,
}

impl GrammarSet {
    /// Create a registry loaded with the built-in grammars
    pub fn new() -> Self {
        let mut set = Self {
            grammars: Vec::new(),
            extension_map: HashMap::new(),
        };
        for grammar in super::builtin::all_grammars() {
            set.add_grammar(grammar);
        }
        set
    }

    /// Add a grammar, claiming its extensions
    pub fn add_grammar(&mut self, grammar: Grammar) {
        let idx = self.grammars.len();
        for ext in grammar.extensions() {
            self.extension_map.insert(ext.to_lowercase(), idx);
        }
        self.grammars.push(grammar);
    }

    /// Find the grammar for a file path by extension
    pub fn detect(&self, path: &str) -> Option<&Grammar> {
        let ext = Path::new(path).extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|&idx| &self.grammars[idx])
    }

    /// Highlight `text` with the grammar for `path`, or produce unstyled
    /// spans when no grammar claims the extension. Never fails.
    pub fn highlight(&self, path: &str, text: &str) -> Vec<Span> {
        match self.detect(path) {
            Some(grammar) => grammar.highlight(text),
            None => plain_spans(text),
        }
    }
}

impl Default for GrammarSet {
    fn default() -> Self {
        Self::new()
    }
}
