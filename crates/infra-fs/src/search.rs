//! First-match lookup over an ordered list of folders

use crate::{Error, NormalizedPath, Result};

/// An ordered list of folders searched for a file by name.
///
/// The first folder holding a regular file with the requested name wins;
/// later folders are never consulted once a match is found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    folders: Vec<NormalizedPath>,
}

impl SearchPath {
    /// Create a search path from folder locations, in priority order.
    pub fn new<I, P>(folders: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<NormalizedPath>,
    {
        Self {
            folders: folders.into_iter().map(Into::into).collect(),
        }
    }

    /// The folders searched, in priority order.
    pub fn folders(&self) -> &[NormalizedPath] {
        &self.folders
    }

    /// Find the first folder containing `file_name`.
    pub fn find(&self, file_name: &str) -> Option<NormalizedPath> {
        let found = self
            .folders
            .iter()
            .map(|folder| folder.join(file_name))
            .find(|candidate| candidate.is_file());
        match &found {
            Some(path) => tracing::debug!(path = %path, "Found file"),
            None => tracing::debug!(file = file_name, folders = self.folders.len(), "File not in search path"),
        }
        found
    }

    /// Like [`SearchPath::find`], but a miss is an error naming every folder tried.
    pub fn require(&self, file_name: &str) -> Result<NormalizedPath> {
        self.find(file_name).ok_or_else(|| Error::NotFound {
            name: file_name.to_string(),
            searched: self
                .folders
                .iter()
                .map(NormalizedPath::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_first_match_wins() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        fs::create_dir_all(&first).unwrap();
        fs::create_dir_all(&second).unwrap();
        fs::write(first.join("test.json"), "{}").unwrap();
        fs::write(second.join("test.json"), "{}").unwrap();

        let search = SearchPath::new([first.clone(), second]);
        let found = search.find("test.json").unwrap();

        assert_eq!(found, NormalizedPath::new(first.join("test.json")));
    }

    #[test]
    fn test_skips_missing_folders() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("test.json"), "{}").unwrap();

        let search = SearchPath::new([
            NormalizedPath::new("/nonexistent/folder"),
            NormalizedPath::new(temp.path()),
        ]);

        assert!(search.find("test.json").is_some());
    }

    #[test]
    fn test_directory_with_matching_name_is_not_a_match() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("test.json")).unwrap();

        let search = SearchPath::new([temp.path()]);

        assert!(search.find("test.json").is_none());
    }

    #[test]
    fn test_require_reports_searched_folders() {
        let search = SearchPath::new(["/nonexistent/a", "/nonexistent/b"]);
        let err = search.require("prod.json").unwrap_err();

        assert!(err.is_not_found());
        let message = err.to_string();
        assert!(message.contains("prod.json"));
        assert!(message.contains("/nonexistent/a, /nonexistent/b"));
    }
}
