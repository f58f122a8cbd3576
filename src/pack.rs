//! `pack.toml` metadata

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::Result;

/// Loader keys checked in `[versions]`, first match wins
const LOADER_KEYS: &[&str] = &["fabric", "quilt", "neoforge", "forge"];

/// Modpack metadata read from the packwiz `pack.toml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackMetadata {
    /// Modpack name
    pub name: String,
    /// Current (live) modpack version
    pub version: String,
    /// Minecraft version, if declared
    pub minecraft_version: Option<String>,
    /// Mod loader version, if declared
    pub loader_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPack {
    name: String,
    version: String,
    #[serde(default)]
    versions: toml::Table,
}

impl PackMetadata {
    /// Read `pack.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or lacks `name`/`version`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pack manifest: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse pack manifest: {}", path.display()))
    }

    /// Parse `pack.toml` content
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or lacks
    /// `name`/`version`.
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawPack = toml::from_str(content)?;

        let version_of = |key: &str| {
            raw.versions
                .get(key)
                .and_then(toml::Value::as_str)
                .map(str::to_string)
        };

        Ok(Self {
            minecraft_version: version_of("minecraft"),
            loader_version: LOADER_KEYS.iter().copied().find_map(&version_of),
            name: raw.name,
            version: raw.version,
        })
    }
}
