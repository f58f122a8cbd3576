//! Common types and utilities for command execution

use std::fs;
use std::path::Path;

use anyhow::Context;
use packlog::config::{Config, ConfigManager};
use packlog::pack::PackMetadata;
use packlog::pipeline::{DirectorySnapshots, NoSnapshots, SnapshotSource};

/// Execution options shared by every command
#[allow(clippy::struct_excessive_bools)]
pub struct CommandOptions<'a> {
    /// Enable verbose output
    pub verbose: bool,
    /// Print documents instead of writing them
    pub dry_run: bool,
    /// Treat warnings as errors
    pub strict: bool,
    /// Path to custom config file
    pub config_path: Option<&'a Path>,
    /// Skip loading all config files
    pub no_config: bool,
}

impl<'a> CommandOptions<'a> {
    /// Create new command options
    #[must_use]
    #[allow(clippy::fn_params_excessive_bools)]
    pub const fn new(
        verbose: bool,
        dry_run: bool,
        strict: bool,
        config_path: Option<&'a Path>,
        no_config: bool,
    ) -> Self {
        Self {
            verbose,
            dry_run,
            strict,
            config_path,
            no_config,
        }
    }

    /// Load configuration according to the `--config`/`--no-config` flags
    pub fn load_config(&self) -> anyhow::Result<Config> {
        if self.no_config {
            return ConfigManager::defaults();
        }
        ConfigManager::load(self.config_path).context("Failed to load configuration")
    }

    /// Write a rendered document, or print it in dry-run mode
    pub fn write_document(&self, path: &Path, document: &str) -> anyhow::Result<()> {
        if self.dry_run {
            println!("[dry-run] Would write {}:\n", path.display());
            print!("{document}");
            return Ok(());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, document)
            .with_context(|| format!("Failed to write document: {}", path.display()))?;

        println!("Wrote {}", path.display());
        Ok(())
    }

    /// Print warnings, then fail on them in strict mode
    pub fn report_warnings(&self, warnings: &[String]) -> anyhow::Result<()> {
        for warning in warnings {
            eprintln!("warning: {warning}");
        }
        self.check_strict(warnings)
    }

    /// Fail if any warning was raised in strict mode
    pub fn check_strict(&self, warnings: &[String]) -> anyhow::Result<()> {
        if self.strict && !warnings.is_empty() {
            anyhow::bail!("{} warning(s) raised in strict mode", warnings.len());
        }
        Ok(())
    }
}

/// Read `pack.toml`, tolerating its absence
pub fn load_pack(config: &Config, verbose: bool) -> Option<PackMetadata> {
    match PackMetadata::load(&config.pack.manifest) {
        Ok(pack) => Some(pack),
        Err(e) => {
            if verbose {
                eprintln!("Pack metadata unavailable: {e:#}");
            }
            tracing::debug!(error = %e, "pack metadata unavailable");
            None
        }
    }
}

/// Pack name from config, falling back to `pack.toml`
pub fn pack_name(config: &Config, pack: Option<&PackMetadata>) -> Option<String> {
    config
        .pack
        .name
        .clone()
        .or_else(|| pack.map(|p| p.name.clone()))
}

/// Explicit version, else the `pack.toml` version
pub fn resolve_version(explicit: Option<&str>, pack: Option<&PackMetadata>) -> Option<String> {
    explicit
        .map(str::to_string)
        .or_else(|| pack.map(|p| p.version.clone()))
}

/// Snapshot source for the configured snapshot root
pub fn snapshot_source(config: &Config) -> Box<dyn SnapshotSource> {
    match &config.snapshots.root {
        Some(root) => Box::new(DirectorySnapshots::new(root)),
        None => Box::new(NoSnapshots),
    }
}
