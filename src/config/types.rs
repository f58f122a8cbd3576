//! Configuration types and structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How note files are put into chronological order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseOrder {
    /// Sort by the parsed release version
    #[default]
    Version,
    /// Trust the file-name order of the notes directory
    Filename,
}

/// `[pack]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackSettings {
    /// Modpack name used in headings (defaults to the `pack.toml` name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Path to the packwiz `pack.toml`
    pub manifest: PathBuf,
}

impl Default for PackSettings {
    fn default() -> Self {
        Self {
            name: None,
            manifest: PathBuf::from("pack.toml"),
        }
    }
}

/// `[manifests]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestSettings {
    /// Live manifest directory
    pub dir: PathBuf,

    /// Manifest file extension
    pub extension: String,

    /// Dotted manifest key compared between snapshots
    pub tracked_field: String,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("mods"),
            extension: "toml".to_string(),
            tracked_field: "filename".to_string(),
        }
    }
}

/// `[notes]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteSettings {
    /// Directory with one YAML note per release
    pub dir: PathBuf,

    /// Chronological ordering strategy
    pub order: ReleaseOrder,
}

impl Default for NoteSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("changelogs"),
            order: ReleaseOrder::default(),
        }
    }
}

/// `[snapshots]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotSettings {
    /// Directory holding one materialized manifest directory per version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

/// `[render]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Document title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Label placed before the loader version
    pub loader_label: String,

    /// Link to a release's mod updates, `{version}` is substituted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mod_updates_url: Option<String>,

    /// Link to the full changelog, `{version}` is substituted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_changelog_url: Option<String>,

    /// Keep square brackets inside code spans
    pub keep_brackets: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            title: None,
            loader_label: "Fabric Loader".to_string(),
            mod_updates_url: None,
            full_changelog_url: None,
            keep_brackets: true,
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Full changelog document
    pub changelog: PathBuf,

    /// Directory for per-release mod update documents
    pub mod_updates_dir: PathBuf,

    /// Platform release notes document
    pub release_notes: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            changelog: PathBuf::from("CHANGELOG.md"),
            mod_updates_dir: PathBuf::from("mod-updates"),
            release_notes: PathBuf::from("release-notes.md"),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pack metadata
    pub pack: PackSettings,
    /// Live manifest directory
    pub manifests: ManifestSettings,
    /// Release notes
    pub notes: NoteSettings,
    /// Historical manifest snapshots
    pub snapshots: SnapshotSettings,
    /// Markdown rendering
    pub render: RenderSettings,
    /// Output files
    pub output: OutputSettings,
}
