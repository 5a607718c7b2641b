//! Cyclic search sessions
//!
//! One state machine serves both search surfaces: the archive tree (where
//! a match is a tree node) and the content view (where a match is a byte
//! range). A session remembers the term, case flag, match list, and a
//! wrapping cursor; repeating the same search reuses the session instead
//! of recomputing, so next/previous cycle through a stable list.

/// A single in-content match, as a half-open byte range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentMatch {
    pub start: usize,
    pub end: usize,
}

/// Remembered result set for one (term, case-sensitivity) pair
#[derive(Debug, Clone)]
pub struct SearchSession<M> {
    term: String,
    case_sensitive: bool,
    matches: Vec<M>,
    cursor: usize,
}

impl<M: Copy> SearchSession<M> {
    /// The search term this session was computed for
    pub fn term(&self) -> &str {
        &self.term
    }

    /// All matches, in the order the search produced them
    pub fn matches(&self) -> &[M] {
        &self.matches
    }

    /// Number of matches (never zero; empty searches produce no session)
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    /// Current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The match under the cursor
    pub fn current(&self) -> M {
        self.matches[self.cursor]
    }
}

/// What a search request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome<M> {
    /// Blank term: nothing happened, any previous session is untouched
    NoOp,
    /// The term matched nothing; the state is idle
    Empty,
    /// A match is selected; `index` is zero-based into `count` matches
    Match { current: M, index: usize, count: usize },
}

/// Search state: idle until a search finds matches, then a wrapping
/// cursor over the remembered match list
#[derive(Debug)]
pub struct SearchState<M> {
    session: Option<SearchSession<M>>,
}

impl<M: Copy> SearchState<M> {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Run a search. `compute` is only invoked when the (term, case) key
    /// differs from the current session; otherwise the existing match
    /// list and cursor are reused as-is.
    pub fn search(
        &mut self,
        term: &str,
        case_sensitive: bool,
        compute: impl FnOnce(&str, bool) -> Vec<M>,
    ) -> SearchOutcome<M> {
        if term.trim().is_empty() {
            return SearchOutcome::NoOp;
        }

        let reusable = self
            .session
            .as_ref()
            .is_some_and(|s| s.term == term && s.case_sensitive == case_sensitive);
        if !reusable {
            let matches = compute(term, case_sensitive);
            if matches.is_empty() {
                self.session = None;
                return SearchOutcome::Empty;
            }
            self.session = Some(SearchSession {
                term: term.to_string(),
                case_sensitive,
                matches,
                cursor: 0,
            });
        }
        self.outcome()
    }

    /// Advance to the next match, wrapping; no-op when idle
    pub fn next(&mut self) -> Option<M> {
        self.advance(1)
    }

    /// Step back to the previous match, wrapping; no-op when idle
    pub fn prev(&mut self) -> Option<M> {
        self.advance(-1)
    }

    fn advance(&mut self, delta: isize) -> Option<M> {
        let session = self.session.as_mut()?;
        let count = session.matches.len() as isize;
        session.cursor = ((session.cursor as isize + delta + count) % count) as usize;
        Some(session.matches[session.cursor])
    }

    /// The active session, if any
    pub fn session(&self) -> Option<&SearchSession<M>> {
        self.session.as_ref()
    }

    /// Drop any remembered session
    pub fn clear(&mut self) {
        self.session = None;
    }

    fn outcome(&self) -> SearchOutcome<M> {
        match &self.session {
            Some(session) => SearchOutcome::Match {
                current: session.current(),
                index: session.cursor,
                count: session.count(),
            },
            None => SearchOutcome::Empty,
        }
    }
}

impl<M: Copy> Default for SearchState<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Find every occurrence of `term` in `text` as byte ranges, in order.
/// Both sides are lowercased when `case_sensitive` is false; offsets are
/// relative to the folded haystack, which coincides with the original
/// text for ASCII content.
pub fn find_occurrences(text: &str, term: &str, case_sensitive: bool) -> Vec<ContentMatch> {
    if term.is_empty() {
        return Vec::new();
    }
    let (haystack, needle) = if case_sensitive {
        (text.to_string(), term.to_string())
    } else {
        (text.to_lowercase(), term.to_lowercase())
    };
    let mut matches = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        matches.push(ContentMatch {
            start,
            end: start + needle.len(),
        });
        from = start + needle.len();
    }
    matches
}
