//! Hand-authored release notes (one YAML file per release)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::key::ReleaseKey;

/// Channel a release is published on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    /// Early testing build
    Alpha,
    /// Feature complete testing build
    Beta,
    /// Stable release
    Release,
}

impl ReleaseType {
    /// Derive the release type from a version string
    #[must_use]
    pub fn from_version(version: &str) -> Self {
        let version = version.to_lowercase();
        if version.contains("alpha") {
            Self::Alpha
        } else if version.contains("beta") {
            Self::Beta
        } else {
            Self::Release
        }
    }

    /// Whether this is an alpha or beta
    #[must_use]
    pub const fn is_prerelease(self) -> bool {
        matches!(self, Self::Alpha | Self::Beta)
    }

    /// Lowercase name used by publishing workflows
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Release => "release",
        }
    }
}

/// One release's changelog entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseNote {
    /// Version, with or without a leading `v`
    pub version: String,
    /// Mod loader version shipped with the release
    pub loader_version: Option<String>,
    /// "Changes/Improvements" lines
    pub improvements: Vec<String>,
    /// "Update overview" lines
    pub overview: Vec<String>,
    /// "Bug Fixes" lines
    pub bug_fixes: Vec<String>,
    /// "Config Changes" lines
    pub config_changes: Vec<String>,
    /// File the note was loaded from
    pub source: Option<PathBuf>,
}

impl ReleaseNote {
    /// Create an empty note for a version
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Read and parse a note file
    ///
    /// # Errors
    ///
    /// Returns a [`NoteError`] if the file cannot be read or is not a YAML
    /// mapping with the expected value shapes.
    pub fn from_file(path: &Path) -> Result<Self, NoteError> {
        let content = fs::read_to_string(path).map_err(|source| NoteError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(path, &content)
    }

    /// Parse note content that was read from `path`
    ///
    /// A missing `version` key falls back to the file stem.
    ///
    /// # Errors
    ///
    /// See [`ReleaseNote::from_file`].
    pub fn from_yaml(path: &Path, content: &str) -> Result<Self, NoteError> {
        let raw: RawNote = if content.trim().is_empty() {
            RawNote::default()
        } else {
            serde_yml::from_str(content).map_err(|source| NoteError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };

        let version = raw.version.map(Scalar::into_text).unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        Ok(Self {
            version,
            loader_version: raw.loader_version.map(Scalar::into_text),
            improvements: Lines::flatten(raw.improvements),
            overview: Lines::flatten(raw.overview),
            bug_fixes: Lines::flatten(raw.bug_fixes),
            config_changes: Lines::flatten(raw.config_changes),
            source: Some(path.to_path_buf()),
        })
    }

    /// Sort key derived from the version
    #[must_use]
    pub fn key(&self) -> ReleaseKey {
        ReleaseKey::parse(&self.version)
    }

    /// Release channel derived from the version
    #[must_use]
    pub fn release_type(&self) -> ReleaseType {
        ReleaseType::from_version(&self.version)
    }
}

/// Why a note file was left out of the release index
#[derive(Debug, Error)]
pub enum NoteError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Offending file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid note document
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Offending file
        path: PathBuf,
        /// Underlying YAML error
        #[source]
        source: serde_yml::Error,
    },
}

impl NoteError {
    /// Path of the note file this error refers to
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawNote {
    #[serde(default)]
    version: Option<Scalar>,

    #[serde(
        default,
        rename = "Fabric version",
        alias = "Loader version",
        alias = "loader_version"
    )]
    loader_version: Option<Scalar>,

    #[serde(default, rename = "Changes/Improvements")]
    improvements: Option<Lines>,

    #[serde(default, rename = "Update overview")]
    overview: Option<Lines>,

    #[serde(default, rename = "Bug Fixes")]
    bug_fixes: Option<Lines>,

    #[serde(default, rename = "Config Changes")]
    config_changes: Option<Lines>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Lines {
    One(Scalar),
    Many(Vec<Option<Scalar>>),
}

impl Lines {
    fn flatten(lines: Option<Self>) -> Vec<String> {
        let lines = match lines {
            None => Vec::new(),
            Some(Self::One(line)) => vec![line.into_text()],
            Some(Self::Many(lines)) => lines.into_iter().flatten().map(Scalar::into_text).collect(),
        };

        lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTE: &str = r#"
version: "1.2.0"
Fabric version: 0.16.5
Changes/Improvements:
  - Rebalanced [Create] recipes
  - Faster world generation
Update overview: Big content update
Bug Fixes:
Config Changes:
  - "[ftb-quests] chapter order"
"#;

    #[test]
    fn test_parse_note() {
        let note = ReleaseNote::from_yaml(Path::new("1.2.0+1.21.1.yml"), NOTE).unwrap();

        assert_eq!(note.version, "1.2.0");
        assert_eq!(note.loader_version.as_deref(), Some("0.16.5"));
        assert_eq!(note.improvements.len(), 2);
        assert_eq!(note.overview, vec!["Big content update"]);
        assert!(note.bug_fixes.is_empty());
        assert_eq!(note.config_changes, vec!["[ftb-quests] chapter order"]);
        assert_eq!(note.source.as_deref(), Some(Path::new("1.2.0+1.21.1.yml")));
    }

    #[test]
    fn test_version_falls_back_to_file_stem() {
        let note = ReleaseNote::from_yaml(Path::new("notes/1.3.0.yml"), "Bug Fixes: [crash]").unwrap();
        assert_eq!(note.version, "1.3.0");
    }

    #[test]
    fn test_numeric_version() {
        let note = ReleaseNote::from_yaml(Path::new("x.yml"), "version: 2\n").unwrap();
        assert_eq!(note.version, "2");
    }

    #[test]
    fn test_loader_version_alias() {
        let note = ReleaseNote::from_yaml(Path::new("x.yml"), "Loader version: \"21.1.66\"\n").unwrap();
        assert_eq!(note.loader_version.as_deref(), Some("21.1.66"));
    }

    #[test]
    fn test_empty_file_is_valid() {
        let note = ReleaseNote::from_yaml(Path::new("0.9.0.yaml"), "").unwrap();
        assert_eq!(note.version, "0.9.0");
        assert!(note.improvements.is_empty());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let err = ReleaseNote::from_yaml(Path::new("bad.yml"), "version: [unclosed").unwrap_err();
        assert!(matches!(err, NoteError::Parse { .. }));
        assert!(err.to_string().contains("bad.yml"));
    }

    #[test]
    fn test_release_type() {
        assert_eq!(ReleaseType::from_version("1.0.0-beta.1"), ReleaseType::Beta);
        assert_eq!(ReleaseType::from_version("1.0.0-Alpha"), ReleaseType::Alpha);
        assert_eq!(ReleaseType::from_version("1.0.0"), ReleaseType::Release);
        assert!(ReleaseType::Beta.is_prerelease());
        assert_eq!(ReleaseType::Release.as_str(), "release");
    }
}
