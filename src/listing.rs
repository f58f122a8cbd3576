//! Flat directory listing shared by the manifest and release-note readers
//!
//! Only the immediate children of the directory are considered; nested
//! directories are never traversed.

use std::path::{Path, PathBuf};

use anyhow::Context;
use walkdir::WalkDir;

use crate::error::Result;

/// List files directly inside `base` whose extension is one of `extensions`
///
/// Entries come back in file-name order so that repeated loads of the same
/// directory always see the same sequence.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or if there are
/// permission issues.
pub fn scan(base: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(base)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to list directory: {}", base.display()))?;
        let path = entry.path();

        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| extensions.iter().any(|wanted| ext == *wanted))
        {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
