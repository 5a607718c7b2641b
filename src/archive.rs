//! Java archive access
//!
//! Wraps a zip-backed archive behind the two operations the rest of the
//! viewer needs: list entry paths and read entry bytes. The entry listing
//! is captured once at open time in the archive's own enumeration order,
//! which is what the path tree is built from. The viewer owns the handle
//! exclusively; dropping it releases the underlying file.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::error::{JarViewError, Result};

/// Maximum number of alternatives suggested for a missing entry
const MAX_SUGGESTIONS: usize = 20;

/// An open Java archive
pub struct Jar {
    path: PathBuf,
    archive: ZipArchive<File>,
    /// Entry paths in enumeration order, captured at open time
    entries: Vec<String>,
}

impl Jar {
    /// Open an archive file
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;
        let mut entries = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            entries.push(archive.by_index(i)?.name().to_string());
        }
        Ok(Self {
            path: path.to_path_buf(),
            archive,
            entries,
        })
    }

    /// Archive file name, used as the tree's root label
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Entry paths in archive enumeration order
    pub fn entry_names(&self) -> &[String] {
        &self.entries
    }

    /// Number of file entries (directories excluded)
    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.ends_with('/')).count()
    }

    /// Read the raw bytes of an entry.
    ///
    /// The path is normalized first (surrounding whitespace per segment,
    /// optional leading slash). A missing entry comes back as
    /// `EntryNotFound` carrying similar entries as suggestions; a
    /// directory entry comes back as `IsDirectory`.
    pub fn read(&mut self, entry_path: &str) -> Result<Vec<u8>> {
        let name = match self.resolve(entry_path) {
            Some(name) => name,
            None => {
                return Err(JarViewError::EntryNotFound {
                    path: entry_path.to_string(),
                    suggestions: self.similar_entries(entry_path),
                })
            }
        };
        if name.ends_with('/') {
            return Err(JarViewError::IsDirectory(name));
        }
        let mut file = self.archive.by_name(&name)?;
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Map a user-supplied path onto a known entry name
    fn resolve(&self, entry_path: &str) -> Option<String> {
        let cleaned = clean_path(entry_path);
        for candidate in [cleaned.as_str(), cleaned.trim_start_matches('/')] {
            if candidate.is_empty() {
                continue;
            }
            if self.entries.iter().any(|e| e == candidate) {
                return Some(candidate.to_string());
            }
            // Directory entries carry a trailing slash in the archive
            let as_dir = format!("{}/", candidate);
            if self.entries.iter().any(|e| *e == as_dir) {
                return Some(as_dir);
            }
        }
        None
    }

    /// Entries similar to a path that failed to resolve: same simple
    /// name, or simple-name stems containing each other. Capped so a
    /// hopeless term does not echo the whole archive back.
    pub fn similar_entries(&self, entry_path: &str) -> Vec<String> {
        let cleaned = clean_path(entry_path);
        let simple = cleaned
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&cleaned);
        let stem = simple.strip_suffix(".class").unwrap_or(simple);
        if stem.is_empty() {
            return Vec::new();
        }

        let mut suggestions = Vec::new();
        for name in &self.entries {
            if name.ends_with('/') {
                continue;
            }
            let entry_simple = name.rsplit('/').next().unwrap_or(name);
            let entry_stem = entry_simple.strip_suffix(".class").unwrap_or(entry_simple);
            if entry_stem.contains(stem)
                || stem.contains(entry_stem)
                || (stem.len() > 3 && name.contains(stem))
            {
                suggestions.push(name.clone());
                if suggestions.len() == MAX_SUGGESTIONS {
                    break;
                }
            }
        }
        suggestions
    }
}

/// Trim the path and the whitespace around each segment
fn clean_path(path: &str) -> String {
    path.trim()
        .split('/')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
pub(crate) fn write_test_jar(entries: &[(&str, &[u8])]) -> tempfile::NamedTempFile {
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    let file = tempfile::NamedTempFile::new().expect("create temp jar");
    let mut writer = zip::ZipWriter::new(file.reopen().expect("reopen temp jar"));
    let options = SimpleFileOptions::default();
    for (name, data) in entries {
        if name.ends_with('/') {
            writer
                .add_directory(name.trim_end_matches('/'), options)
                .expect("add directory");
        } else {
            writer.start_file(*name, options).expect("start file");
            writer.write_all(data).expect("write entry");
        }
    }
    writer.finish().expect("finish jar");
    file
}
