//! Delta engine
//!
//! Classifies every manifest file name of two snapshots as added, removed,
//! modified or unchanged. File names are the identity; the tracked version
//! decides whether a record present on both sides was modified.

use crate::manifest::{ManifestRecord, ManifestSnapshot};

/// A mod present in both snapshots whose tracked version changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifiedMod {
    /// Bracket-stripped display name
    pub name: String,
    /// Tracked version in the old snapshot
    pub old_version: String,
    /// Tracked version in the new snapshot
    pub new_version: String,
}

/// Result of comparing an old snapshot against a new one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeltaResult {
    /// Labeled names of mods only in the new snapshot
    pub added: Vec<String>,
    /// Clean names of mods only in the old snapshot
    pub removed: Vec<String>,
    /// Mods in both snapshots with a different tracked version
    pub modified: Vec<ModifiedMod>,
}

impl DeltaResult {
    /// Whether nothing changed between the two snapshots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// Total number of changed mods
    #[must_use]
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }
}

/// Compare two snapshots
///
/// Added and modified entries follow the iteration order of `new`, removed
/// entries the order of `old`.
#[must_use]
pub fn diff(old: &ManifestSnapshot, new: &ManifestSnapshot) -> DeltaResult {
    let mut delta = DeltaResult::default();

    for record in new.iter() {
        match old.get(&record.filename) {
            None => delta.added.push(record.labeled_name()),
            Some(previous) if previous.tracked_version != record.tracked_version => {
                delta.modified.push(modified(previous, record));
            }
            Some(_) => {}
        }
    }

    delta.removed = old
        .iter()
        .filter(|record| !new.contains(&record.filename))
        .map(ManifestRecord::clean_name)
        .collect();

    delta
}

fn modified(previous: &ManifestRecord, current: &ManifestRecord) -> ModifiedMod {
    ModifiedMod {
        name: current.clean_name(),
        old_version: previous.tracked_version.clone(),
        new_version: current.tracked_version.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::manifest::Side;

    fn record(file: &str, name: &str, side: Side, track: &str) -> ManifestRecord {
        ManifestRecord {
            filename: file.to_string(),
            display_name: name.to_string(),
            side,
            tracked_version: track.to_string(),
        }
    }

    #[test]
    fn test_added_removed_modified() {
        let old: ManifestSnapshot = vec![
            record("a.toml", "A", Side::Both, "1"),
            record("b.toml", "B", Side::Both, "1"),
        ]
        .into_iter()
        .collect();
        let new: ManifestSnapshot = vec![
            record("a.toml", "A", Side::Both, "2"),
            record("c.toml", "C", Side::Client, "1"),
        ]
        .into_iter()
        .collect();

        let delta = diff(&old, &new);

        assert_eq!(delta.added, vec!["C [Client]"]);
        assert_eq!(delta.removed, vec!["B"]);
        assert_eq!(
            delta.modified,
            vec![ModifiedMod {
                name: "A".to_string(),
                old_version: "1".to_string(),
                new_version: "2".to_string(),
            }]
        );
        assert_eq!(delta.len(), 3);
    }

    #[test]
    fn test_identical_snapshots_produce_empty_delta() {
        let snapshot: ManifestSnapshot = vec![
            record("a.toml", "A", Side::Both, "1"),
            record("s.toml", "S (Server Utils)", Side::Server, "9"),
        ]
        .into_iter()
        .collect();

        assert!(diff(&snapshot, &snapshot).is_empty());
    }

    #[test]
    fn test_names_are_stripped() {
        let old: ManifestSnapshot = vec![record("x.toml", "Xaero's Map [Fabric] (Client)", Side::Both, "1")]
            .into_iter()
            .collect();
        let new: ManifestSnapshot = vec![record("y.toml", "Your Mod {beta}", Side::Server, "1")]
            .into_iter()
            .collect();

        let delta = diff(&old, &new);

        assert_eq!(delta.removed, vec!["Xaero's Map"]);
        assert_eq!(delta.added, vec!["Your Mod [Server]"]);
    }

    #[test]
    fn test_empty_old_snapshot_marks_everything_added() {
        let new: ManifestSnapshot = vec![
            record("a.toml", "A", Side::Both, "1"),
            record("b.toml", "B", Side::Client, "1"),
        ]
        .into_iter()
        .collect();

        let delta = diff(&ManifestSnapshot::new(), &new);
        assert_eq!(delta.added.len(), 2);
        assert!(delta.removed.is_empty());
    }

    #[test]
    fn test_classification_partitions_filenames() {
        let old: ManifestSnapshot = vec![
            record("keep.toml", "Keep", Side::Both, "1"),
            record("bump.toml", "Bump", Side::Both, "1"),
            record("gone.toml", "Gone", Side::Both, "1"),
        ]
        .into_iter()
        .collect();
        let new: ManifestSnapshot = vec![
            record("keep.toml", "Keep", Side::Both, "1"),
            record("bump.toml", "Bump", Side::Both, "2"),
            record("new.toml", "New", Side::Both, "1"),
        ]
        .into_iter()
        .collect();

        let delta = diff(&old, &new);

        let added: BTreeSet<_> = delta.added.iter().cloned().collect();
        let removed: BTreeSet<_> = delta.removed.iter().cloned().collect();
        let modified: BTreeSet<_> = delta.modified.iter().map(|m| m.name.clone()).collect();

        assert!(added.is_disjoint(&removed));
        assert!(added.is_disjoint(&modified));
        assert!(removed.is_disjoint(&modified));
        assert_eq!(added.len() + removed.len() + modified.len() + 1, 4);
        assert!(!added.contains("Keep") && !modified.contains("Keep"));
    }
}
