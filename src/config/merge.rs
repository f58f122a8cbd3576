//! Configuration merging with precedence rules
//!
//! # Merging Semantics
//!
//! Files are merged table by table. Within a table, a key from a
//! higher-precedence file replaces the same key from a lower one; keys it
//! does not mention are left alone. Missing keys fall back to the defaults
//! in [`Config`].

use std::fs;
use std::path::Path;

use anyhow::Context;

use super::discovery::ConfigFiles;
use super::types::Config;
use crate::error::Result;

/// Configuration merger
pub struct ConfigMerger;

impl ConfigMerger {
    /// Create a new config merger
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Merge multiple config files with precedence rules
    ///
    /// Precedence order (highest to lowest):
    /// 1. CLI config
    /// 2. .packlog.local.toml
    /// 3. .packlog.toml
    /// 4. Global config
    ///
    /// # Errors
    ///
    /// Returns an error if config files cannot be read or parsed.
    pub fn merge(files: &ConfigFiles) -> Result<Config> {
        let mut merged = toml::Table::new();

        for path in files.in_merge_order() {
            Self::merge_into(&mut merged, path)?;
        }

        toml::Value::Table(merged)
            .try_into::<Config>()
            .context("Failed to build configuration from merged config files")
    }

    /// Load and merge a single config file into the existing table
    fn merge_into(base: &mut toml::Table, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        deep_merge(base, table);
        Ok(())
    }
}

impl Default for ConfigMerger {
    fn default() -> Self {
        Self::new()
    }
}

fn deep_merge(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        let merged = match (base.remove(&key), value) {
            (Some(toml::Value::Table(mut existing)), toml::Value::Table(incoming)) => {
                deep_merge(&mut existing, incoming);
                toml::Value::Table(existing)
            }
            (_, value) => value,
        };
        base.insert(key, merged);
    }
}
