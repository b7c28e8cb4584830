//! In-memory [`FileSystem`] used by the core modules' tests.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::filesystem::FileSystem;

/// Fake filesystem seeded with directories, symbolic links and injected
/// failures. Directory entries are returned exactly in seeding order, which
/// is what lets the tests pin down the no-re-sorting behavior of the walker.
#[derive(Debug, Default)]
pub struct FakeFileSystem {
    directories: HashMap<PathBuf, Vec<String>>,
    links: HashMap<PathBuf, PathBuf>,
    listing_denied: HashSet<PathBuf>,
    attributes_denied: HashSet<PathBuf>,
}

impl FakeFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>, entries: &[&str]) -> Self {
        self.directories.insert(
            path.into(),
            entries.iter().map(|entry| entry.to_string()).collect(),
        );
        self
    }

    pub fn with_link(mut self, path: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        self.links.insert(path.into(), target.into());
        self
    }

    /// The path stays traversable but listing it fails, mimicking a race or
    /// a permissions edge case below the pre-check.
    pub fn with_denied_listing(mut self, path: impl Into<PathBuf>) -> Self {
        self.listing_denied.insert(path.into());
        self
    }

    pub fn with_denied_attributes(mut self, path: impl Into<PathBuf>) -> Self {
        self.attributes_denied.insert(path.into());
        self
    }
}

impl FileSystem for FakeFileSystem {
    fn list_directory(&self, path: &Path) -> io::Result<Vec<String>> {
        if self.listing_denied.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "listing denied",
            ));
        }
        self.directories
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))
    }

    fn is_traversable(&self, path: &Path) -> bool {
        self.directories.contains_key(path) || self.listing_denied.contains(path)
    }

    fn is_symbolic_link(&self, path: &Path) -> io::Result<bool> {
        if self.attributes_denied.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "attributes denied",
            ));
        }
        Ok(self.links.contains_key(path))
    }

    fn read_link_target(&self, path: &Path) -> io::Result<PathBuf> {
        self.links
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "not a symbolic link"))
    }
}
