//! Release index
//!
//! Loads the directory of per-release note files and orders it newest
//! first. Each release's predecessor is the next entry in that order; the
//! oldest release has none.

mod key;
mod note;

use std::path::Path;

use anyhow::Context;

pub use key::ReleaseKey;
pub use note::{NoteError, ReleaseNote, ReleaseType};

use crate::changelog::text::bare_version;
use crate::config::ReleaseOrder;
use crate::error::Result;
use crate::listing;

const NOTE_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Whether two version strings name the same release, ignoring a leading `v`
#[must_use]
pub fn same_version(left: &str, right: &str) -> bool {
    bare_version(left) == bare_version(right)
}

/// Releases in newest-first order
#[derive(Debug, Clone, Default)]
pub struct ReleaseIndex {
    releases: Vec<ReleaseNote>,
}

/// Outcome of loading a notes directory
#[derive(Debug, Default)]
pub struct IndexLoad {
    /// Successfully parsed releases
    pub index: ReleaseIndex,
    /// Note files that could not be parsed
    pub skipped: Vec<NoteError>,
    /// Duplicate versions and out-of-order file names
    pub warnings: Vec<String>,
}

impl ReleaseIndex {
    /// Load every note file in `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if the directory does not exist or cannot be listed.
    /// Unparseable notes are reported in [`IndexLoad::skipped`].
    pub fn load(dir: &Path, order: ReleaseOrder) -> Result<IndexLoad> {
        if !dir.is_dir() {
            anyhow::bail!("Release notes directory does not exist: {}", dir.display());
        }

        let paths = listing::scan(dir, NOTE_EXTENSIONS)
            .with_context(|| format!("Failed to scan release notes: {}", dir.display()))?;

        let mut notes = Vec::with_capacity(paths.len());
        let mut skipped = Vec::new();
        for path in paths {
            match ReleaseNote::from_file(&path) {
                Ok(note) => notes.push(note),
                Err(e) => {
                    tracing::warn!(path = %e.path().display(), error = %e, "skipping release note");
                    skipped.push(e);
                }
            }
        }

        let index = Self::from_notes(notes, order);
        let warnings = index.ordering_warnings(order);
        for warning in &warnings {
            tracing::warn!("{warning}");
        }

        tracing::debug!(
            dir = %dir.display(),
            releases = index.len(),
            skipped = skipped.len(),
            "loaded release notes"
        );

        Ok(IndexLoad {
            index,
            skipped,
            warnings,
        })
    }

    /// Build an index from notes given in storage (file-name) order
    #[must_use]
    pub fn from_notes(mut notes: Vec<ReleaseNote>, order: ReleaseOrder) -> Self {
        match order {
            ReleaseOrder::Version => {
                // Stable sort keeps storage order for equal keys.
                notes.sort_by_key(ReleaseNote::key);
                notes.reverse();
            }
            ReleaseOrder::Filename => notes.reverse(),
        }

        Self { releases: notes }
    }

    /// Problems with the release order that do not stop loading
    ///
    /// Adjacent notes naming the same version are reported for either order.
    /// With file-name ordering, a file that sorts newer than its version is
    /// reported too.
    #[must_use]
    pub fn ordering_warnings(&self, order: ReleaseOrder) -> Vec<String> {
        let mut warnings = Vec::new();

        for pair in self.releases.windows(2) {
            let (newer, older) = (&pair[0], &pair[1]);
            if same_version(&newer.version, &older.version) {
                warnings.push(format!(
                    "Duplicate release version {} in {} and {}",
                    newer.version,
                    origin(older),
                    origin(newer)
                ));
            } else if order == ReleaseOrder::Filename && newer.key() < older.key() {
                warnings.push(format!(
                    "Note file {} sorts after {} but has an older version ({} < {})",
                    origin(newer),
                    origin(older),
                    newer.version,
                    older.version
                ));
            }
        }

        warnings
    }

    /// Releases, newest first
    #[must_use]
    pub fn releases(&self) -> &[ReleaseNote] {
        &self.releases
    }

    /// The release immediately before the one at `idx`
    #[must_use]
    pub fn previous(&self, idx: usize) -> Option<&ReleaseNote> {
        self.releases.get(idx + 1)
    }

    /// Position of a version in newest-first order
    #[must_use]
    pub fn position(&self, version: &str) -> Option<usize> {
        self.releases
            .iter()
            .position(|note| same_version(&note.version, version))
    }

    /// Look up a release by version
    #[must_use]
    pub fn find(&self, version: &str) -> Option<&ReleaseNote> {
        self.position(version).map(|idx| &self.releases[idx])
    }

    /// The newest release
    #[must_use]
    pub fn latest(&self) -> Option<&ReleaseNote> {
        self.releases.first()
    }

    /// Each release paired with its predecessor, newest first
    pub fn with_previous(&self) -> impl Iterator<Item = (&ReleaseNote, Option<&ReleaseNote>)> {
        self.releases
            .iter()
            .enumerate()
            .map(|(idx, note)| (note, self.previous(idx)))
    }

    /// Number of releases
    #[must_use]
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Whether there are no releases
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

/// File name a note was loaded from, for messages
fn origin(note: &ReleaseNote) -> String {
    match note.source.as_deref().and_then(Path::file_name) {
        Some(name) => name.to_string_lossy().into_owned(),
        None => format!("note {}", note.version),
    }
}
