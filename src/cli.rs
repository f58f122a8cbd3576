use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Modpack Changelog Tool
///
/// Diff mod manifests between releases and assemble the modpack changelog
#[derive(Parser, Debug)]
#[command(name = "packlog")]
#[command(long_about = None, version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print documents instead of writing them (dry-run)
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Fail when any manifest or note had to be skipped
    #[arg(long, global = true)]
    pub strict: bool,

    /// Use specific config file
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "PACKLOG_CONFIG",
        conflicts_with = "no_config"
    )]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the full changelog from every release note
    Changelog {
        /// Version whose manifests are the live working directory (default: pack.toml version)
        #[arg(long, value_name = "VERSION")]
        live_version: Option<String>,

        /// Output file (default: output.changelog from config)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show added, removed and updated mods between two manifest directories
    Diff {
        /// Older manifest directory
        old: PathBuf,

        /// Newer manifest directory
        new: PathBuf,
    },

    /// List active mods of a manifest directory
    Mods {
        /// Manifest directory (default: manifests.dir from config)
        dir: Option<PathBuf>,
    },

    /// Write the mod updates document of one release
    ModUpdates {
        /// Release version (default: pack.toml version)
        version: Option<String>,

        /// Version whose manifests are the live working directory (default: pack.toml version)
        #[arg(long, value_name = "VERSION")]
        live_version: Option<String>,
    },

    /// Write the platform release notes of one release
    ReleaseNotes {
        /// Release version (default: pack.toml version, else the newest note)
        version: Option<String>,

        /// Output file (default: output.release_notes from config)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show active configuration
    Config,
}
