//! Configuration file support
//!
//! Loads settings from ~/.jarview.toml (or %USERPROFILE%\.jarview.toml on
//! Windows). Missing file or unparseable contents fall back to defaults.
//!
//! Example:
//! ```text
//! # jarview configuration
//! decompiler-jar = "lib/cfr-0.152.jar"
//! case-sensitive-search = false
//! show-icons = true
//! tab-width = 4
//! color = true
//! ```

use std::fs;
use std::path::PathBuf;

/// Configuration settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Jar of the external decompiler invoked for class entries
    pub decompiler_jar: PathBuf,
    /// Default case sensitivity for searches
    pub case_sensitive_search: bool,
    /// Whether to prefix tree labels with file-type icons
    pub show_icons: bool,
    /// Tab width for content display
    pub tab_width: usize,
    /// Whether to colorize output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decompiler_jar: PathBuf::from("lib/cfr-0.152.jar"),
            case_sensitive_search: false,
            show_icons: true,
            tab_width: 4,
            color: true,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".jarview.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".jarview.toml"))
        }
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                if let Ok(table) = contents.parse::<toml::Table>() {
                    config.apply(&table);
                }
            }
        }

        config
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &toml::Table) {
        if let Some(value) = table.get("decompiler-jar").and_then(|v| v.as_str()) {
            self.decompiler_jar = PathBuf::from(value);
        }

        if let Some(value) = table.get("case-sensitive-search").and_then(|v| v.as_bool()) {
            self.case_sensitive_search = value;
        }

        if let Some(value) = table.get("show-icons").and_then(|v| v.as_bool()) {
            self.show_icons = value;
        }

        if let Some(value) = table.get("tab-width").and_then(|v| v.as_integer()) {
            self.tab_width = (value.max(0) as usize).clamp(1, 16);
        }

        if let Some(value) = table.get("color").and_then(|v| v.as_bool()) {
            self.color = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.case_sensitive_search);
        assert!(config.show_icons);
        assert_eq!(config.tab_width, 4);
    }

    #[test]
    fn test_apply_settings() {
        let table = r#"
            decompiler-jar = "/opt/cfr.jar"
            case-sensitive-search = true
            show-icons = false
            tab-width = 8
            color = false
        "#
        .parse::<toml::Table>()
        .unwrap();

        let mut config = Config::default();
        config.apply(&table);
        assert_eq!(config.decompiler_jar, PathBuf::from("/opt/cfr.jar"));
        assert!(config.case_sensitive_search);
        assert!(!config.show_icons);
        assert_eq!(config.tab_width, 8);
        assert!(!config.color);
    }

    #[test]
    fn test_tab_width_clamped() {
        let table = "tab-width = 99".parse::<toml::Table>().unwrap();
        let mut config = Config::default();
        config.apply(&table);
        assert_eq!(config.tab_width, 16);

        let table = "tab-width = 0".parse::<toml::Table>().unwrap();
        config.apply(&table);
        assert_eq!(config.tab_width, 1);
    }

    #[test]
    fn test_wrong_types_ignored() {
        let table = r#"tab-width = "wide""#.parse::<toml::Table>().unwrap();
        let mut config = Config::default();
        config.apply(&table);
        assert_eq!(config.tab_width, 4);
    }
}
