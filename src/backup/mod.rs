//! Traversal of the on-disk backup hierarchy.
//!
//! A backup volume mounted under `/Volumes` nests its snapshots as
//! `Backups.backupdb/<computer>/<date>/<disk>/...`. The walker descends
//! that hierarchy for every mounted volume and reports the listings of a
//! requested location, deduplicated so only content changes surface.

mod dedup;
mod location;
mod volumes;
mod walker;

pub use dedup::ChangeDeduplicator;
pub use location::ResolvedLocation;
pub use volumes::{DiskResolutionError, VOLUMES_ROOT, resolve_disk_name};
pub use walker::{BACKUP_STORE_DIR, ListingSink, SnapshotWalker, WalkError};
