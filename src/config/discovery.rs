//! Configuration file discovery from multiple locations

use std::path::{Path, PathBuf};

/// Configuration file locations in order of precedence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFiles {
    /// Config from CLI flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// Untracked project override (.packlog.local.toml)
    pub local: Option<PathBuf>,
    /// Project config (.packlog.toml)
    pub project: Option<PathBuf>,
    /// Global XDG config
    pub global: Option<PathBuf>,
}

impl ConfigFiles {
    /// Discovered files from lowest to highest precedence
    pub fn in_merge_order(&self) -> impl Iterator<Item = &PathBuf> {
        [&self.global, &self.project, &self.local, &self.cli]
            .into_iter()
            .flatten()
    }
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Create a new config discovery instance
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Discover all available configuration files
    ///
    /// A CLI path that does not exist is returned as-is so that merging
    /// reports it instead of silently ignoring a typo.
    pub fn discover(cli_path: Option<&Path>) -> ConfigFiles {
        let cli = cli_path.map(Path::to_path_buf);

        let local = Self::find_file(".packlog.local.toml");
        let project = Self::find_file(".packlog.toml");
        let global = Self::find_global_config();

        ConfigFiles {
            cli,
            local,
            project,
            global,
        }
    }

    /// Find a config file in the current directory or parent directories
    fn find_file(name: &str) -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Find global config in XDG config directory
    fn find_global_config() -> Option<PathBuf> {
        let global_config = dirs::config_dir()?.join("packlog").join("config.toml");

        if global_config.is_file() {
            Some(global_config)
        } else {
            None
        }
    }
}

impl Default for ConfigDiscovery {
    fn default() -> Self {
        Self::new()
    }
}
