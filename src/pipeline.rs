//! Changelog pipeline
//!
//! Ties the release index, manifest reader, delta engine and renderer
//! together. For every release, newest first, the manifests of the release
//! are compared with those of its predecessor:
//!
//! - the oldest release has no predecessor and gets no mod delta
//! - the live version is read from the working manifest directory
//! - every other version is read from its materialized snapshot, unless
//!   the snapshot source has no history at all
//!
//! A snapshot that should exist but does not is reported as a warning and
//! the release is rendered without a delta, never as "everything added".

mod reporting;
mod snapshots;


use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use reporting::PipelineReporter;
pub use snapshots::{DirectorySnapshots, NoSnapshots, SnapshotSource};

use crate::changelog::{ChangelogEntry, ChangelogRenderer};
use crate::config::{Config, NoteSettings};
use crate::delta::{DeltaResult, diff};
use crate::error::Result;
use crate::manifest::{ManifestReader, ManifestSnapshot, RecordError};
use crate::pack::PackMetadata;
use crate::release::{IndexLoad, ReleaseIndex, ReleaseNote, same_version};

/// Outcome of a changelog run
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// Rendered markdown document
    pub document: String,
    /// Releases rendered
    pub releases: usize,
    /// Releases that received a mod delta
    pub deltas: usize,
    /// Recoverable problems encountered along the way
    pub warnings: Vec<String>,
}

impl PipelineReport {
    /// Whether the run finished without any warning
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Delta of a single release plus the warnings collected computing it
#[derive(Debug, Clone, Default)]
pub struct ReleaseDelta {
    /// The delta, absent for the first release or when a snapshot is missing
    pub delta: Option<DeltaResult>,
    /// Recoverable problems encountered
    pub warnings: Vec<String>,
}

/// Main changelog pipeline
pub struct ChangelogPipeline {
    reader: ManifestReader,
    renderer: ChangelogRenderer,
    notes: NoteSettings,
    live_dir: PathBuf,
}

impl ChangelogPipeline {
    /// Create a pipeline from configuration
    #[must_use]
    pub fn new(config: &Config, pack_name: Option<&str>) -> Self {
        Self {
            reader: ManifestReader::new(&config.manifests),
            renderer: ChangelogRenderer::new(&config.render, pack_name),
            notes: config.notes.clone(),
            live_dir: config.manifests.dir.clone(),
        }
    }

    /// Hand `pack.toml` metadata to the renderer
    #[must_use]
    pub fn with_pack(mut self, pack: Option<&PackMetadata>) -> Self {
        if let Some(pack) = pack {
            self.renderer = self.renderer.with_pack(pack);
        }
        self
    }

    /// The renderer used for every document
    #[must_use]
    pub const fn renderer(&self) -> &ChangelogRenderer {
        &self.renderer
    }

    /// The manifest reader used for every snapshot
    #[must_use]
    pub const fn reader(&self) -> &ManifestReader {
        &self.reader
    }

    /// Load the configured release notes
    ///
    /// # Errors
    ///
    /// Returns an error if the notes directory is missing or unreadable.
    pub fn load_index(&self) -> Result<IndexLoad> {
        ReleaseIndex::load(&self.notes.dir, self.notes.order)
    }

    /// Build the full changelog
    ///
    /// # Errors
    ///
    /// Returns an error if the release notes cannot be loaded. Problems with
    /// individual notes and snapshots end up in [`PipelineReport::warnings`].
    pub fn build(
        &self,
        live_version: Option<&str>,
        snapshots: &dyn SnapshotSource,
    ) -> Result<PipelineReport> {
        let IndexLoad {
            index,
            skipped,
            warnings: ordering,
        } = self.load_index()?;

        let mut warnings: Vec<String> = skipped.iter().map(ToString::to_string).collect();
        warnings.extend(ordering);
        if let Some(live) = live_version.filter(|live| index.find(live).is_none()) {
            tracing::warn!(version = %live, "live version has no release note");
            warnings.push(format!("Live version {live} has no release note"));
        }

        let mut cache = SnapshotCache::new(&self.reader);
        let deltas: Vec<Option<DeltaResult>> = index
            .with_previous()
            .map(|(note, previous)| {
                self.delta_for(note, previous, live_version, snapshots, &mut cache, &mut warnings)
            })
            .collect();

        let entries: Vec<ChangelogEntry<'_>> = index
            .releases()
            .iter()
            .zip(deltas)
            .map(|(note, delta)| ChangelogEntry { note, delta })
            .collect();

        Ok(PipelineReport {
            document: self.renderer.render(&entries),
            releases: index.len(),
            deltas: entries.iter().filter(|e| e.delta.is_some()).count(),
            warnings,
        })
    }

    /// Compute the delta of one release in an already loaded index
    ///
    /// Unlike [`ChangelogPipeline::build`], a historical release that cannot
    /// be diffed for lack of snapshot history is reported as a warning. Only
    /// the oldest release yields neither a delta nor a warning.
    #[must_use]
    pub fn release_delta(
        &self,
        index: &ReleaseIndex,
        version: &str,
        live_version: Option<&str>,
        snapshots: &dyn SnapshotSource,
    ) -> ReleaseDelta {
        let mut warnings = Vec::new();

        let Some(position) = index.position(version) else {
            warnings.push(format!("No release note for version {version}"));
            return ReleaseDelta {
                delta: None,
                warnings,
            };
        };

        let note = &index.releases()[position];
        let previous = index.previous(position);
        let is_live = live_version.is_some_and(|live| same_version(live, &note.version));

        if previous.is_some() && !is_live && !snapshots.has_history() {
            warnings.push(format!(
                "No snapshot history configured; mod changes of {} unavailable",
                note.version
            ));
            return ReleaseDelta {
                delta: None,
                warnings,
            };
        }

        let mut cache = SnapshotCache::new(&self.reader);
        let delta = self.delta_for(
            note,
            previous,
            live_version,
            snapshots,
            &mut cache,
            &mut warnings,
        );

        ReleaseDelta { delta, warnings }
    }

    /// Compare two manifest directories directly
    ///
    /// # Errors
    ///
    /// Returns an error if either directory does not exist.
    pub fn diff_directories(
        &self,
        old_dir: &Path,
        new_dir: &Path,
    ) -> Result<(DeltaResult, Vec<RecordError>)> {
        let old = self.reader.load_snapshot(old_dir)?;
        let new = self.reader.load_snapshot(new_dir)?;

        let mut skipped = old.skipped;
        skipped.extend(new.skipped);

        Ok((diff(&old.snapshot, &new.snapshot), skipped))
    }

    fn delta_for(
        &self,
        note: &ReleaseNote,
        previous: Option<&ReleaseNote>,
        live_version: Option<&str>,
        snapshots: &dyn SnapshotSource,
        cache: &mut SnapshotCache<'_>,
        warnings: &mut Vec<String>,
    ) -> Option<DeltaResult> {
        // First tracked release: nothing to compare against.
        let previous = previous?;

        let is_live = live_version.is_some_and(|live| same_version(live, &note.version));
        if !is_live && !snapshots.has_history() {
            tracing::debug!(version = %note.version, "no snapshot history, mod changes skipped");
            return None;
        }

        let new_dir = if is_live {
            Some(self.live_dir.clone())
        } else {
            snapshots.locate(&note.version)
        };

        let Some(new_dir) = new_dir else {
            return missing_snapshot(&note.version, &note.version, warnings);
        };
        let Some(old_dir) = snapshots.locate(&previous.version) else {
            return missing_snapshot(&previous.version, &note.version, warnings);
        };

        let loaded_new = cache.load(&new_dir, warnings);
        let loaded_old = cache.load(&old_dir, warnings);
        if !(loaded_new && loaded_old) {
            return None;
        }

        let new = cache.get(&new_dir)?;
        let old = cache.get(&old_dir)?;
        Some(diff(old, new))
    }
}

fn missing_snapshot(
    missing: &str,
    release: &str,
    warnings: &mut Vec<String>,
) -> Option<DeltaResult> {
    tracing::warn!(version = %missing, release = %release, "manifest snapshot missing");
    warnings.push(format!(
        "No manifest snapshot for {missing}; mod changes of {release} omitted"
    ));
    None
}

/// Loads each snapshot directory at most once per run
struct SnapshotCache<'a> {
    reader: &'a ManifestReader,
    loaded: HashMap<PathBuf, Option<ManifestSnapshot>>,
}

impl<'a> SnapshotCache<'a> {
    fn new(reader: &'a ManifestReader) -> Self {
        Self {
            reader,
            loaded: HashMap::new(),
        }
    }

    /// Load `dir` unless already attempted; returns whether it is usable
    fn load(&mut self, dir: &Path, warnings: &mut Vec<String>) -> bool {
        if let Some(entry) = self.loaded.get(dir) {
            return entry.is_some();
        }

        let snapshot = match self.reader.load_snapshot(dir) {
            Ok(load) => {
                warnings.extend(load.skipped.iter().map(ToString::to_string));
                Some(load.snapshot)
            }
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to load snapshot");
                warnings.push(format!("{e:#}"));
                None
            }
        };

        let usable = snapshot.is_some();
        self.loaded.insert(dir.to_path_buf(), snapshot);
        usable
    }

    fn get(&self, dir: &Path) -> Option<&ManifestSnapshot> {
        self.loaded.get(dir).and_then(Option::as_ref)
    }
}
