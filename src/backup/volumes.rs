use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::trace;

use crate::filesystem::FileSystem;

/// Mount root under which every backup volume appears.
pub const VOLUMES_ROOT: &str = "/Volumes";

/// Determines which mounted volume a path belongs to.
///
/// Backup disks are commonly referenced through symbolic links under
/// `/Volumes` pointing at the underlying mount. Each candidate volume that
/// is such a link is resolved, and the volume whose link target is the
/// longest path prefix of `location` wins. The longest-match rule is what
/// disambiguates nested mounts. Returns `None` when no link target is a
/// prefix of `location`.
///
/// Attribute and link-read failures propagate: they mean the mount table
/// itself cannot be trusted.
pub fn resolve_disk_name<F: FileSystem>(
    fs: &F,
    location: &Path,
    volumes: &[String],
) -> Result<Option<String>, DiskResolutionError> {
    let mut disk_name = None;
    let mut longest_match = 0;

    for volume in volumes {
        let volume_path = Path::new(VOLUMES_ROOT).join(volume);
        let is_link = fs.is_symbolic_link(&volume_path).context(AttributesSnafu {
            path: volume_path.clone(),
        })?;
        if !is_link {
            continue;
        }

        let target = fs.read_link_target(&volume_path).context(LinkTargetSnafu {
            path: volume_path.clone(),
        })?;
        trace!("Volume '{}' links to {}", volume, target.display());

        if location.starts_with(&target) && target.as_os_str().len() > longest_match {
            longest_match = target.as_os_str().len();
            disk_name = Some(volume.clone());
        }
    }

    Ok(disk_name)
}

#[derive(Debug, Snafu)]
pub enum DiskResolutionError {
    #[snafu(display("Failed to read the attributes of {}", path.display()))]
    AttributesError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read the link target of {}", path.display()))]
    LinkTargetError {
        path: PathBuf,
        source: std::io::Error,
    },
}
