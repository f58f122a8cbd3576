//! Configuration validation and error reporting

use super::types::Config;
use crate::error::Result;

/// Placeholder substituted with the release version in URL templates
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Placeholder substituted with the lowercased pack name
pub const PACK_PLACEHOLDER: &str = "{pack}";

/// Placeholder substituted with the Minecraft version from `pack.toml`
pub const MINECRAFT_PLACEHOLDER: &str = "{minecraft}";

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Create a new config validator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(config: &Config) -> Result<()> {
        if config.manifests.extension.trim_start_matches('.').trim().is_empty() {
            anyhow::bail!("Manifest extension cannot be empty");
        }

        let tracked = &config.manifests.tracked_field;
        if tracked.trim().is_empty() || tracked.split('.').any(str::is_empty) {
            anyhow::bail!("Invalid tracked field: '{tracked}'");
        }

        if config.manifests.dir == config.notes.dir {
            anyhow::bail!(
                "Conflicting configuration: manifests and notes share the directory {}",
                config.notes.dir.display()
            );
        }

        for (key, template) in [
            ("mod_updates_url", &config.render.mod_updates_url),
            ("full_changelog_url", &config.render.full_changelog_url),
        ] {
            if template
                .as_deref()
                .is_some_and(|template| !template.contains(VERSION_PLACEHOLDER))
            {
                anyhow::bail!("render.{key} must contain {VERSION_PLACEHOLDER}");
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
