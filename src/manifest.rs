//! Manifest store reader
//!
//! A manifest directory holds one TOML file per mod (packwiz layout). This
//! module loads such a directory into a [`ManifestSnapshot`] keyed by file
//! name. Broken files never abort a load: each one is reported back in
//! [`SnapshotLoad::skipped`] so callers can decide how strict to be.

mod record;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;

pub use record::{ManifestRecord, RecordError, Side, parse_file, parse_str};

use crate::config::ManifestSettings;
use crate::error::Result;
use crate::listing;

/// The full mod set at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSnapshot {
    records: BTreeMap<String, ManifestRecord>,
}

impl ManifestSnapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a record by manifest file name
    #[must_use]
    pub fn get(&self, filename: &str) -> Option<&ManifestRecord> {
        self.records.get(filename)
    }

    /// Whether a manifest file name is part of this snapshot
    #[must_use]
    pub fn contains(&self, filename: &str) -> bool {
        self.records.contains_key(filename)
    }

    /// Iterate over records in file-name order
    pub fn iter(&self) -> impl Iterator<Item = &ManifestRecord> {
        self.records.values()
    }

    /// Number of active records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot has no active records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Labeled names of every record, sorted case-insensitively
    #[must_use]
    pub fn active_mods(&self) -> Vec<String> {
        let mut names: Vec<String> = self.iter().map(ManifestRecord::labeled_name).collect();
        names.sort_by_key(|name| name.to_lowercase());
        names
    }
}

impl FromIterator<ManifestRecord> for ManifestSnapshot {
    fn from_iter<I: IntoIterator<Item = ManifestRecord>>(iter: I) -> Self {
        Self {
            records: iter
                .into_iter()
                .map(|record| (record.filename.clone(), record))
                .collect(),
        }
    }
}

/// Outcome of loading one manifest directory
#[derive(Debug, Default)]
pub struct SnapshotLoad {
    /// Successfully parsed, active records
    pub snapshot: ManifestSnapshot,
    /// Files that could not be turned into records
    pub skipped: Vec<RecordError>,
    /// Files whose side marks them inactive
    pub excluded: Vec<String>,
}

/// Hard failures of a snapshot load
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest directory itself is absent
    #[error("manifest directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),
}

/// Loads manifest directories into snapshots
#[derive(Debug, Clone)]
pub struct ManifestReader {
    extension: String,
    tracked_field: String,
}

impl ManifestReader {
    /// Create a reader from the `[manifests]` configuration section
    #[must_use]
    pub fn new(settings: &ManifestSettings) -> Self {
        Self::with_fields(&settings.extension, &settings.tracked_field)
    }

    /// Create a reader for a given file extension and tracked field
    #[must_use]
    pub fn with_fields(extension: &str, tracked_field: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_string(),
            tracked_field: tracked_field.to_string(),
        }
    }

    /// Load every manifest in `dir`
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::MissingDirectory`] if `dir` does not exist,
    /// or an error if the directory cannot be listed. Individual broken
    /// files are reported in [`SnapshotLoad::skipped`] instead.
    pub fn load_snapshot(&self, dir: &Path) -> Result<SnapshotLoad> {
        if !dir.is_dir() {
            return Err(ManifestError::MissingDirectory(dir.to_path_buf()).into());
        }

        let paths = listing::scan(dir, &[self.extension.as_str()])
            .with_context(|| format!("Failed to scan manifest directory: {}", dir.display()))?;

        let mut load = SnapshotLoad::default();
        let mut records = Vec::with_capacity(paths.len());

        for path in paths {
            match parse_file(&path, &self.tracked_field) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {
                    tracing::debug!(path = %path.display(), "manifest excluded by side");
                    load.excluded.push(
                        path.file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                            .unwrap_or_default(),
                    );
                }
                Err(e) => {
                    tracing::warn!(path = %e.path().display(), error = %e, "skipping manifest");
                    load.skipped.push(e);
                }
            }
        }

        load.snapshot = records.into_iter().collect();
        tracing::debug!(
            dir = %dir.display(),
            records = load.snapshot.len(),
            skipped = load.skipped.len(),
            excluded = load.excluded.len(),
            "loaded manifest snapshot"
        );

        Ok(load)
    }
}
