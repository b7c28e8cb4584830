use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The filesystem operations the traversal depends on.
pub trait FileSystem {
    /// Returns the entry names of a directory, in the order the underlying
    /// storage yields them. The order is never adjusted here.
    fn list_directory(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Whether `path` is a directory that can be descended into. Any failure
    /// to answer counts as "no".
    fn is_traversable(&self, path: &Path) -> bool;

    /// Whether `path` itself is a symbolic link. Unlike the traversability
    /// pre-check, an unreadable entry is an error here: the caller is
    /// inspecting the mount table and must not silently misread it.
    fn is_symbolic_link(&self, path: &Path) -> io::Result<bool>;

    fn read_link_target(&self, path: &Path) -> io::Result<PathBuf>;
}

/// [`FileSystem`] implementation on top of `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn list_directory(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            entries.push(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(entries)
    }

    fn is_traversable(&self, path: &Path) -> bool {
        fs::metadata(path)
            .map(|metadata| metadata.is_dir() && mode_allows_search(&metadata))
            .unwrap_or(false)
    }

    fn is_symbolic_link(&self, path: &Path) -> io::Result<bool> {
        Ok(fs::symlink_metadata(path)?.file_type().is_symlink())
    }

    fn read_link_target(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }
}

#[cfg(unix)]
fn mode_allows_search(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;

    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn mode_allows_search(_metadata: &fs::Metadata) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn list_directory_returns_every_entry() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        File::create(temp_dir.path().join("beta.txt")).expect("Failed to create file");
        File::create(temp_dir.path().join("alpha.txt")).expect("Failed to create file");
        fs::create_dir(temp_dir.path().join("nested")).expect("Failed to create directory");

        let mut entries = OsFileSystem
            .list_directory(temp_dir.path())
            .expect("Failed to list temp directory");
        entries.sort();

        assert_eq!(entries, vec!["alpha.txt", "beta.txt", "nested"]);
    }

    #[test]
    fn list_directory_fails_on_missing_path() {
        let result = OsFileSystem.list_directory(Path::new("/this/path/does/not/exist"));
        assert!(result.is_err());
    }

    #[test]
    fn directories_are_traversable() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        assert!(OsFileSystem.is_traversable(temp_dir.path()));
    }

    #[test]
    fn files_are_not_traversable() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("plain.txt");
        File::create(&file_path).expect("Failed to create file");

        assert!(!OsFileSystem.is_traversable(&file_path));
    }

    #[test]
    fn missing_paths_are_not_traversable() {
        assert!(!OsFileSystem.is_traversable(Path::new("/this/path/does/not/exist")));
    }

    #[cfg(unix)]
    #[test]
    fn symbolic_links_are_recognized_and_resolved() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let target = temp_dir.path().join("target");
        let link = temp_dir.path().join("link");
        fs::create_dir(&target).expect("Failed to create directory");
        std::os::unix::fs::symlink(&target, &link).expect("Failed to create symlink");

        assert!(
            OsFileSystem
                .is_symbolic_link(&link)
                .expect("Failed to read link attributes")
        );
        assert!(
            !OsFileSystem
                .is_symbolic_link(&target)
                .expect("Failed to read target attributes")
        );
        assert_eq!(
            OsFileSystem
                .read_link_target(&link)
                .expect("Failed to read link target"),
            target
        );
    }

    #[test]
    fn attribute_reads_fail_on_missing_path() {
        let result = OsFileSystem.is_symbolic_link(Path::new("/this/path/does/not/exist"));
        assert!(result.is_err());
    }
}
