use std::collections::{HashMap, HashSet};

use crate::backup::ResolvedLocation;

/// Suppresses consecutive listings whose contents did not change.
///
/// State is kept per (volume, location) stream: switching volume or
/// location starts a fresh stream, so the first listing of a stream is
/// always emitted. Two listings count as equal when they contain the same
/// set of names; order differences alone never trigger a report.
#[derive(Debug, Default)]
pub struct ChangeDeduplicator {
    last_emitted: HashMap<(String, ResolvedLocation), HashSet<String>>,
}

impl ChangeDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `entries` differ from the last emitted listing of
    /// this stream, recording them as the new baseline when they do.
    pub fn should_emit(
        &mut self,
        volume: &str,
        location: &ResolvedLocation,
        entries: &[String],
    ) -> bool {
        let names: HashSet<String> = entries.iter().cloned().collect();
        let key = (volume.to_string(), location.clone());
        match self.last_emitted.get(&key) {
            Some(previous) if *previous == names => false,
            _ => {
                self.last_emitted.insert(key, names);
                true
            }
        }
    }
}
