use std::fmt;
use std::path::{Path, PathBuf};

use derive_more::From;

/// A requested lookup path, normalized to absolute form.
///
/// Relative input is resolved against the caller's working directory, which
/// is injected rather than read here. Snapshot paths are built by appending
/// the location below a snapshot's disk root, so the type also exposes the
/// root-stripped form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, From)]
pub struct ResolvedLocation(PathBuf);

impl ResolvedLocation {
    pub fn resolve(raw: impl AsRef<Path>, working_directory: &Path) -> Self {
        let raw = raw.as_ref();
        if raw.is_absolute() {
            Self(raw.to_path_buf())
        } else {
            Self(working_directory.join(raw))
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// The location without its leading root component, suitable for
    /// joining below a snapshot's disk directory.
    pub fn below_root(&self) -> &Path {
        self.0.strip_prefix("/").unwrap_or(&self.0)
    }
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn absolute_paths_are_kept_verbatim() {
        let location = ResolvedLocation::resolve("/Users/me/doc", Path::new("/somewhere/else"));
        assert_eq!(location.as_path(), Path::new("/Users/me/doc"));
    }

    #[rstest]
    #[case("doc", "/Users/me/doc")]
    #[case("doc/reports", "/Users/me/doc/reports")]
    #[case(".", "/Users/me/.")]
    fn relative_paths_are_joined_to_the_working_directory(
        #[case] raw: &str,
        #[case] expected: &str,
    ) {
        let location = ResolvedLocation::resolve(raw, Path::new("/Users/me"));
        assert_eq!(location.as_path(), Path::new(expected));
    }

    #[test]
    fn below_root_strips_the_leading_root() {
        let location = ResolvedLocation::from(PathBuf::from("/Users/me/doc"));
        assert_eq!(location.below_root(), Path::new("Users/me/doc"));
    }

    #[test]
    fn display_shows_the_full_path() {
        let location = ResolvedLocation::from(PathBuf::from("/Users/me/doc"));
        assert_eq!(location.to_string(), "/Users/me/doc");
    }
}
