//! Locating materialized historical manifest snapshots

use std::path::PathBuf;

use crate::changelog::text::{bare_version, normalize_version};

/// Something that knows where a release's manifests were materialized
pub trait SnapshotSource {
    /// Directory holding the manifests of `version`, if it exists locally
    fn locate(&self, version: &str) -> Option<PathBuf>;

    /// Whether historical snapshots are available at all
    fn has_history(&self) -> bool {
        true
    }
}

/// Snapshots stored as `{root}/{version}/`
///
/// The version directory may be named with or without a leading `v`.
#[derive(Debug, Clone)]
pub struct DirectorySnapshots {
    root: PathBuf,
}

impl DirectorySnapshots {
    /// Create a source rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SnapshotSource for DirectorySnapshots {
    fn locate(&self, version: &str) -> Option<PathBuf> {
        [
            version.to_string(),
            bare_version(version).to_string(),
            normalize_version(version),
        ]
        .into_iter()
        .map(|name| self.root.join(name))
        .find(|candidate| candidate.is_dir())
    }
}

/// No historical snapshots are available
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSnapshots;

impl SnapshotSource for NoSnapshots {
    fn locate(&self, _version: &str) -> Option<PathBuf> {
        None
    }

    fn has_history(&self) -> bool {
        false
    }
}
