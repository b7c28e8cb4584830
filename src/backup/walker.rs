use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu};
use tracing::{debug, warn};

use crate::application::RuntimeConfig;
use crate::backup::dedup::ChangeDeduplicator;
use crate::backup::location::ResolvedLocation;
use crate::backup::volumes::{self, DiskResolutionError, VOLUMES_ROOT};
use crate::filesystem::FileSystem;

/// Directory on every backup volume under which per-computer trees nest.
pub const BACKUP_STORE_DIR: &str = "Backups.backupdb";

/// Receives the traversal's findings in emission order.
///
/// Keeping presentation behind this trait is what allows the walk itself to
/// stay free of any printing and fully covered by in-memory tests.
pub trait ListingSink {
    /// A volume carrying backups for the effective computer name was found.
    fn volume_found(&mut self, volume: &str);

    /// A disk name was picked for the snapshot about to be inspected.
    fn disk_selected(&mut self, disk_name: &str);

    /// The listing at `path` differs from the previous one of its stream.
    fn listing(&mut self, path: &Path, entries: &[String]);

    /// Listing `path` failed even though its traversability check passed.
    fn listing_failed(&mut self, path: &Path, error: &std::io::Error);
}

/// Walks the volume → computer → snapshot date → source disk hierarchy for
/// one location at a time, reporting deduplicated content listings.
pub struct SnapshotWalker<'a, F: FileSystem> {
    fs: &'a F,
    config: &'a RuntimeConfig,
    dedup: ChangeDeduplicator,
}

impl<'a, F: FileSystem> SnapshotWalker<'a, F> {
    pub fn new(fs: &'a F, config: &'a RuntimeConfig) -> Self {
        Self {
            fs,
            config,
            dedup: ChangeDeduplicator::new(),
        }
    }

    /// Walks every mounted volume and reports the snapshots of `location`
    /// through `sink`.
    ///
    /// Only an unreadable volumes root or an unreadable mount table abort
    /// the walk; everything below is either skipped silently (failed
    /// traversability pre-checks) or downgraded to a warning.
    pub fn walk(
        &mut self,
        location: &ResolvedLocation,
        sink: &mut impl ListingSink,
    ) -> Result<(), WalkError> {
        let volumes_root = Path::new(VOLUMES_ROOT);
        let volumes = self
            .fs
            .list_directory(volumes_root)
            .context(VolumesSnafu {
                path: volumes_root.to_path_buf(),
            })?;
        debug!("Found {} mounted volumes", volumes.len());

        let forced_disk_name = self.forced_disk_name(location, &volumes)?;

        for volume in &volumes {
            self.walk_volume(volume, forced_disk_name.as_deref(), location, sink);
        }
        Ok(())
    }

    /// The disk name applied to every snapshot date, when there is one: the
    /// caller-supplied name wins, otherwise the mount table may identify
    /// the disk the location lives on.
    fn forced_disk_name(
        &self,
        location: &ResolvedLocation,
        volumes: &[String],
    ) -> Result<Option<String>, WalkError> {
        if let Some(name) = &self.config.forced_disk_name {
            return Ok(Some(name.clone()));
        }

        let resolved = volumes::resolve_disk_name(self.fs, location.as_path(), volumes).context(
            ResolveDiskSnafu {
                location: location.clone(),
            },
        )?;
        if let Some(name) = &resolved {
            debug!("Resolved disk name '{}' for {} from the mount table", name, location);
        }
        Ok(resolved)
    }

    fn walk_volume(
        &mut self,
        volume: &str,
        forced_disk_name: Option<&str>,
        location: &ResolvedLocation,
        sink: &mut impl ListingSink,
    ) {
        let volume_path = Path::new(VOLUMES_ROOT).join(volume);
        let computer_name = self.effective_computer_name(&volume_path);
        let root = volume_path.join(BACKUP_STORE_DIR).join(&computer_name);
        if !self.fs.is_traversable(&root) {
            debug!(
                "Volume '{}' has no backups for '{}'",
                volume, computer_name
            );
            return;
        }
        sink.volume_found(volume);

        let dates = match self.fs.list_directory(&root) {
            Ok(dates) => dates,
            Err(error) => {
                warn!(
                    "Failed to list the snapshots under {}: {}",
                    root.display(),
                    error
                );
                return;
            }
        };
        // Listing order is chronological on the backing store; do not sort.
        for date in &dates {
            self.walk_snapshot(volume, &root, date, forced_disk_name, location, sink);
        }
    }

    fn walk_snapshot(
        &mut self,
        volume: &str,
        root: &Path,
        date: &str,
        forced_disk_name: Option<&str>,
        location: &ResolvedLocation,
        sink: &mut impl ListingSink,
    ) {
        let date_path = root.join(date);
        let disk_names = match forced_disk_name {
            Some(name) => vec![name.to_string()],
            None => match self.fs.list_directory(&date_path) {
                Ok(names) => names,
                Err(error) => {
                    warn!(
                        "Failed to list the disks under {}: {}",
                        date_path.display(),
                        error
                    );
                    return;
                }
            },
        };

        for disk_name in &disk_names {
            sink.disk_selected(disk_name);

            let path = date_path.join(disk_name).join(location.below_root());
            if !self.fs.is_traversable(&path) {
                // Expected: a disk may lack this location in a given snapshot
                continue;
            }
            let entries = match self.fs.list_directory(&path) {
                Ok(entries) => entries,
                Err(error) => {
                    sink.listing_failed(&path, &error);
                    continue;
                }
            };
            let entries = if self.config.include_hidden {
                entries
            } else {
                filter_hidden(entries)
            };

            if self.dedup.should_emit(volume, location, &entries) {
                sink.listing(&path, &entries);
            }
        }
    }

    /// The computer name to use on a given volume: the configured name,
    /// unless the store root carries a case-insensitive match, in which
    /// case the on-disk casing wins. First match in listing order.
    fn effective_computer_name(&self, volume_path: &Path) -> String {
        let store = volume_path.join(BACKUP_STORE_DIR);
        if !self.fs.is_traversable(&store) {
            return self.config.computer_name.clone();
        }
        match self.fs.list_directory(&store) {
            Ok(names) => {
                let configured = self.config.computer_name.to_lowercase();
                names
                    .into_iter()
                    .find(|name| name.to_lowercase() == configured)
                    .unwrap_or_else(|| self.config.computer_name.clone())
            }
            Err(error) => {
                warn!("Failed to list {}: {}", store.display(), error);
                self.config.computer_name.clone()
            }
        }
    }
}

/// Drops entries named with the leading-dot hidden-file convention.
pub(crate) fn filter_hidden(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .filter(|entry| !entry.starts_with('.'))
        .collect()
}

#[derive(Debug, Snafu)]
pub enum WalkError {
    #[snafu(display("Failed to list the mounted volumes under {}", path.display()))]
    VolumesError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to resolve a disk name for {}", location))]
    ResolveDiskError {
        location: ResolvedLocation,
        source: DiskResolutionError,
    },
}
