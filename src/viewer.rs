//! Viewer state
//!
//! Owns the currently open archive and everything derived from it: the
//! path tree, the grammar registry, the decompiler, and the two search
//! sessions (tree and content). Opening an archive always closes the
//! previous one first and builds a fresh tree; nothing survives a
//! replacement except the configuration.

use std::path::Path;

use crate::archive::Jar;
use crate::config::Config;
use crate::decompile::{DecompileOutput, Decompiler};
use crate::error::{JarViewError, Result};
use crate::search::{find_occurrences, ContentMatch, SearchOutcome, SearchState};
use crate::syntax::{GrammarSet, Span};
use crate::tree::{NodeId, PathTree};

/// Entry text ready for display
pub struct EntryContent {
    /// The text to render
    pub text: String,
    /// Path used for language dispatch. Decompiled class entries dispatch
    /// as Java; failure text keeps the entry's own path, which no grammar
    /// claims, so it renders verbatim.
    pub dispatch_path: String,
}

/// The presentation-side owner of the archive and the engines' state
pub struct Viewer {
    jar: Option<Jar>,
    tree: PathTree,
    grammars: GrammarSet,
    decompiler: Decompiler,
    pub tree_search: SearchState<NodeId>,
    pub content_search: SearchState<ContentMatch>,
}

impl Viewer {
    /// Create a viewer with nothing loaded
    pub fn new(config: &Config) -> Self {
        Self {
            jar: None,
            tree: PathTree::new(""),
            grammars: GrammarSet::new(),
            decompiler: Decompiler::new(config.decompiler_jar.clone()),
            tree_search: SearchState::new(),
            content_search: SearchState::new(),
        }
    }

    /// Open an archive, closing any current one first and building a
    /// fresh tree from the entry listing
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.close();
        let jar = Jar::open(path)?;
        let mut tree = PathTree::new(&jar.name());
        for entry in jar.entry_names() {
            tree.insert(entry);
        }
        self.tree = tree;
        self.jar = Some(jar);
        Ok(())
    }

    /// Close the current archive and drop everything derived from it
    pub fn close(&mut self) {
        self.jar = None;
        self.tree = PathTree::new("");
        self.tree_search.clear();
        self.content_search.clear();
    }

    /// Whether an archive is open
    pub fn is_open(&self) -> bool {
        self.jar.is_some()
    }

    /// The open archive
    pub fn jar(&self) -> Option<&Jar> {
        self.jar.as_ref()
    }

    /// The entry tree; fails when nothing is loaded
    pub fn tree(&self) -> Result<&PathTree> {
        if self.jar.is_some() {
            Ok(&self.tree)
        } else {
            Err(JarViewError::NoArchive)
        }
    }

    /// Read an entry and decode it as text
    pub fn entry_text(&mut self, path: &str) -> Result<String> {
        let jar = self.jar.as_mut().ok_or(JarViewError::NoArchive)?;
        let bytes = jar.read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Content for display. Class entries go through the decompiler;
    /// everything else is read as text.
    pub fn entry_content(&mut self, path: &str) -> Result<EntryContent> {
        if path.to_lowercase().ends_with(".class") {
            let jar = self.jar.as_mut().ok_or(JarViewError::NoArchive)?;
            let bytes = jar.read(path)?;
            Ok(match self.decompiler.decompile(&bytes) {
                DecompileOutput::Source(text) => EntryContent {
                    text,
                    dispatch_path: "Decompiled.java".to_string(),
                },
                DecompileOutput::Failure(text) => EntryContent {
                    text,
                    dispatch_path: path.to_string(),
                },
            })
        } else {
            Ok(EntryContent {
                text: self.entry_text(path)?,
                dispatch_path: path.to_string(),
            })
        }
    }

    /// Highlight text under the grammar dispatched for a path
    pub fn highlight(&self, dispatch_path: &str, text: &str) -> Vec<Span> {
        self.grammars.highlight(dispatch_path, text)
    }

    /// Search the entry tree. Reuses the current session when the term
    /// and case flag are unchanged.
    pub fn search_tree(
        &mut self,
        term: &str,
        case_sensitive: bool,
    ) -> Result<SearchOutcome<NodeId>> {
        if self.jar.is_none() {
            return Err(JarViewError::Message("Nothing to search: no archive loaded".to_string()));
        }
        let tree = &self.tree;
        Ok(self
            .tree_search
            .search(term, case_sensitive, |t, cs| tree.search(t, cs)))
    }

    /// Search within entry text already read by the caller
    pub fn search_content(
        &mut self,
        text: &str,
        term: &str,
        case_sensitive: bool,
    ) -> SearchOutcome<ContentMatch> {
        self.content_search
            .search(term, case_sensitive, |t, cs| find_occurrences(text, t, cs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::write_test_jar;

    fn sample_viewer() -> (Viewer, tempfile::NamedTempFile) {
        let file = write_test_jar(&[
            ("com/app/Main.class", &[0xCA, 0xFE, 0xBA, 0xBE, 0, 0, 0, 52][..]),
            ("com/app/util/Helper.class", b"x"),
            ("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\n"),
        ]);
        let mut viewer = Viewer::new(&Config::default());
        viewer.open(file.path()).unwrap();
        (viewer, file)
    }

    #[test]
    fn test_open_builds_tree() {
        let (viewer, _file) = sample_viewer();
        let tree = viewer.tree().unwrap();
        assert!(tree.find("com/app/Main.class").is_some());
        assert!(tree.find("META-INF/MANIFEST.MF").is_some());
    }

    #[test]
    fn test_reopen_replaces_tree() {
        let (mut viewer, _file) = sample_viewer();
        viewer.search_tree("class", false).unwrap();
        assert!(viewer.tree_search.session().is_some());

        let other = write_test_jar(&[("only/Entry.txt", b"x")]);
        viewer.open(other.path()).unwrap();
        let tree = viewer.tree().unwrap();
        assert!(tree.find("com/app/Main.class").is_none());
        assert!(tree.find("only/Entry.txt").is_some());
        // Sessions from the previous archive are gone.
        assert!(viewer.tree_search.session().is_none());
    }

    #[test]
    fn test_close_releases_everything() {
        let (mut viewer, _file) = sample_viewer();
        viewer.close();
        assert!(!viewer.is_open());
        assert!(matches!(viewer.tree(), Err(JarViewError::NoArchive)));
        assert!(matches!(
            viewer.entry_text("META-INF/MANIFEST.MF"),
            Err(JarViewError::NoArchive)
        ));
    }

    #[test]
    fn test_search_without_archive_is_reported() {
        let mut viewer = Viewer::new(&Config::default());
        assert!(matches!(
            viewer.search_tree("x", false),
            Err(JarViewError::Message(_))
        ));
    }

    #[test]
    fn test_tree_search_scenario() {
        let (mut viewer, _file) = sample_viewer();
        let outcome = viewer.search_tree("class", false).unwrap();
        let first = match outcome {
            SearchOutcome::Match { current, index, count } => {
                assert_eq!(index, 0);
                assert_eq!(count, 2);
                current
            }
            other => panic!("expected matches, got {:?}", other),
        };
        let tree = viewer.tree().unwrap();
        assert_eq!(tree.label(first), "Main.class");

        // Pre-order: Main.class before Helper.class.
        let next = viewer.tree_search.next().unwrap();
        assert_eq!(viewer.tree().unwrap().label(next), "Helper.class");
    }

    #[test]
    fn test_repeated_search_keeps_cursor() {
        let (mut viewer, _file) = sample_viewer();
        viewer.search_tree("class", false).unwrap();
        viewer.tree_search.next();
        let outcome = viewer.search_tree("class", false).unwrap();
        assert!(matches!(outcome, SearchOutcome::Match { index: 1, .. }));
    }

    #[test]
    fn test_entry_content_class_without_decompiler() {
        let (mut viewer, _file) = sample_viewer();
        let content = viewer.entry_content("com/app/Main.class").unwrap();
        // No decompiler jar on disk: fallback description, rendered verbatim.
        assert!(content.text.contains("Java class version: 52.0"));
        assert_eq!(content.dispatch_path, "com/app/Main.class");
    }

    #[test]
    fn test_content_search_sessions() {
        let (mut viewer, _file) = sample_viewer();
        let text = viewer.entry_text("META-INF/MANIFEST.MF").unwrap();
        let outcome = viewer.search_content(&text, "manifest", false);
        assert!(matches!(outcome, SearchOutcome::Match { count: 1, .. }));
        assert!(matches!(
            viewer.search_content(&text, "absent", false),
            SearchOutcome::Empty
        ));
    }
}
