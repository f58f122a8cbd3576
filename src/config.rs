//! Configuration file parsing, merging, and validation
//!
//! This module handles:
//! - Config file discovery from multiple locations
//! - TOML parsing with serde
//! - Config merging with precedence rules
//! - Validation and error reporting

mod discovery;
mod merge;
mod types;
mod validation;

#[cfg(test)]
mod integration_tests;

use std::path::Path;

pub use discovery::{ConfigDiscovery, ConfigFiles};
pub use merge::ConfigMerger;
pub use types::{
    Config, ManifestSettings, NoteSettings, OutputSettings, PackSettings, ReleaseOrder,
    RenderSettings, SnapshotSettings,
};
pub use validation::{
    ConfigValidator, MINECRAFT_PLACEHOLDER, PACK_PLACEHOLDER, VERSION_PLACEHOLDER,
};

use crate::error::Result;

/// Configuration manager that coordinates discovery, parsing, merging, and validation
pub struct ConfigManager;

impl ConfigManager {
    /// Load and merge configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if config files are invalid or cannot be read.
    pub fn load(cli_config_path: Option<&Path>) -> Result<Config> {
        let config_files = ConfigDiscovery::discover(cli_config_path);
        Self::load_files(&config_files)
    }

    /// Merge and validate an explicit set of config files
    ///
    /// # Errors
    ///
    /// Returns an error if config files are invalid or cannot be read.
    pub fn load_files(config_files: &ConfigFiles) -> Result<Config> {
        let merged = ConfigMerger::merge(config_files)?;
        ConfigValidator::validate(&merged)?;
        Ok(merged)
    }

    /// Built-in defaults, ignoring every config file
    ///
    /// # Errors
    ///
    /// Returns an error if the defaults fail validation.
    pub fn defaults() -> Result<Config> {
        let config = Config::default();
        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

/// Values substituted into a URL template
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateValues<'a> {
    /// Release version, without a leading `v`
    pub version: &'a str,
    /// Pack name, lowercased on substitution
    pub pack: Option<&'a str>,
    /// Minecraft version the pack targets
    pub minecraft: Option<&'a str>,
}

/// Substitute release values into a URL template
///
/// Placeholders without a value are left as written.
#[must_use]
pub fn expand_template(template: &str, values: &TemplateValues<'_>) -> String {
    let mut expanded = template.replace(VERSION_PLACEHOLDER, values.version);
    if let Some(pack) = values.pack {
        expanded = expanded.replace(PACK_PLACEHOLDER, &pack.to_lowercase());
    }
    if let Some(minecraft) = values.minecraft {
        expanded = expanded.replace(MINECRAFT_PLACEHOLDER, minecraft);
    }
    expanded
}
