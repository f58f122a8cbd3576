//! Single manifest file parsing

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::changelog::text::strip_bracketed;

/// Where a mod has to be installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Client-only mod
    Client,
    /// Server-only mod
    Server,
    /// Required on both sides
    Both,
}

impl Side {
    /// Parse a raw `side` value, returning `None` for inactive values
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "client" => Some(Self::Client),
            "server" => Some(Self::Server),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    /// Capitalized label used in display suffixes
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Server => "Server",
            Self::Both => "Both",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One mod entry loaded from a manifest file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    /// Manifest file name, unique within a snapshot
    pub filename: String,
    /// Human readable name, possibly with bracketed annotations
    pub display_name: String,
    /// Install side
    pub side: Side,
    /// Content identity compared between snapshots
    pub tracked_version: String,
}

impl ManifestRecord {
    /// Display name with every bracketed annotation removed
    #[must_use]
    pub fn clean_name(&self) -> String {
        strip_bracketed(&self.display_name)
    }

    /// Clean name with a `[Client]`/`[Server]` tag for one-sided mods
    #[must_use]
    pub fn labeled_name(&self) -> String {
        let name = self.clean_name();
        match self.side {
            Side::Both => name,
            side => format!("{name} [{side}]"),
        }
    }
}

/// Why a manifest file was left out of a snapshot
#[derive(Debug, Error)]
pub enum RecordError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Offending file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Offending file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// A required field is absent
    #[error("{} has no `{field}` field", path.display())]
    MissingField {
        /// Offending file
        path: PathBuf,
        /// Dotted field name
        field: String,
    },

    /// A field holds a table, array, or date instead of a scalar
    #[error("`{field}` in {} is not a scalar value", path.display())]
    NotScalar {
        /// Offending file
        path: PathBuf,
        /// Dotted field name
        field: String,
    },
}

impl RecordError {
    /// Path of the manifest file this error refers to
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::MissingField { path, .. }
            | Self::NotScalar { path, .. } => path,
        }
    }
}

/// Read and parse one manifest file
///
/// Returns `Ok(None)` when the record's side is not client, server, or both.
///
/// # Errors
///
/// Returns a [`RecordError`] if the file cannot be read or parsed, or a
/// required field is missing.
pub fn parse_file(path: &Path, tracked_field: &str) -> Result<Option<ManifestRecord>, RecordError> {
    let content = fs::read_to_string(path).map_err(|source| RecordError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_str(path, &content, tracked_field)
}

/// Parse manifest content that was read from `path`
///
/// # Errors
///
/// See [`parse_file`].
pub fn parse_str(
    path: &Path,
    content: &str,
    tracked_field: &str,
) -> Result<Option<ManifestRecord>, RecordError> {
    let table: toml::Table = toml::from_str(content).map_err(|source| RecordError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let raw_side = scalar_field(path, &table, "side")?;
    let Some(side) = Side::parse(&raw_side) else {
        return Ok(None);
    };

    let display_name = scalar_field(path, &table, "name")?;
    let tracked_version = scalar_field(path, &table, tracked_field)?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Some(ManifestRecord {
        filename,
        display_name,
        side,
        tracked_version,
    }))
}

/// Look up a dotted key (`update.modrinth.version`) and render it as text
fn scalar_field(path: &Path, table: &toml::Table, field: &str) -> Result<String, RecordError> {
    let missing = || RecordError::MissingField {
        path: path.to_path_buf(),
        field: field.to_string(),
    };

    let mut keys = field.split('.');
    let first = keys.next().ok_or_else(missing)?;
    let mut value = table.get(first).ok_or_else(missing)?;
    for key in keys {
        value = value.get(key).ok_or_else(missing)?;
    }

    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        _ => Err(RecordError::NotScalar {
            path: path.to_path_buf(),
            field: field.to_string(),
        }),
    }
}
