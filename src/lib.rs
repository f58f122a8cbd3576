//! # packlog
//!
//! Core library for modpack release bookkeeping.
//!
//! This library loads mod manifests, computes the delta between two
//! manifest snapshots, and assembles hand-written release notes plus those
//! deltas into a markdown changelog.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Core error types for the packlog library
pub mod error {
    /// Result type alias using `anyhow::Error`
    pub type Result<T> = anyhow::Result<T>;
}

/// Manifest loading and side filtering
pub mod manifest;

/// Added/removed/modified classification between snapshots
pub mod delta;

/// Release note loading and chronological ordering
pub mod release;

/// Markdown rendering and text cleanup
pub mod changelog;

/// Configuration file parsing and management
pub mod config;

/// `pack.toml` metadata
pub mod pack;

/// Changelog assembly across the whole release history
pub mod pipeline;

mod listing;
