//! Changelog renderer
//!
//! Turns release notes and their mod deltas into markdown. Every document
//! is a sequence of blocks separated by one blank line:
//!
//! ```text
//! # Title
//!
//! ## Pack | v1.1.0
//!
//! *Fabric Loader 0.16.5* | *[Mod Updates](https://...)*
//!
//! ### Added Mods
//!
//! - Sodium `[Client]`
//!
//! ## Pack | v1.0.0
//! ```

mod mod_updates;
mod release_notes;
pub mod text;

use crate::config::{
    MINECRAFT_PLACEHOLDER, PACK_PLACEHOLDER, RenderSettings, TemplateValues, expand_template,
};
use crate::delta::DeltaResult;
use crate::pack::PackMetadata;
use crate::release::{ReleaseNote, same_version};
use text::{bare_version, bullet_list, codify_bracketed, normalize_version};

/// One release section to render
#[derive(Debug, Clone)]
pub struct ChangelogEntry<'a> {
    /// Hand-written notes for the release
    pub note: &'a ReleaseNote,
    /// Mod delta against the previous release, if one could be computed
    pub delta: Option<DeltaResult>,
}

/// Markdown renderer configured from the `[render]` section
#[derive(Debug, Clone)]
pub struct ChangelogRenderer {
    pack_name: Option<String>,
    title: Option<String>,
    loader_label: String,
    mod_updates_url: Option<String>,
    full_changelog_url: Option<String>,
    keep_brackets: bool,
    pack: Option<PackMetadata>,
}

impl ChangelogRenderer {
    /// Create a renderer
    #[must_use]
    pub fn new(settings: &RenderSettings, pack_name: Option<&str>) -> Self {
        Self {
            pack_name: pack_name.map(str::to_string),
            title: settings.title.clone(),
            loader_label: settings.loader_label.clone(),
            mod_updates_url: settings.mod_updates_url.clone(),
            full_changelog_url: settings.full_changelog_url.clone(),
            keep_brackets: settings.keep_brackets,
            pack: None,
        }
    }

    /// Use `pack.toml` metadata for URL templates and the live release
    ///
    /// The Minecraft version fills `{minecraft}`. The pack's loader version
    /// becomes the subtitle of the release matching the pack version when
    /// its note names none. `{pack}` falls back to the pack's name.
    #[must_use]
    pub fn with_pack(mut self, pack: &PackMetadata) -> Self {
        if self.pack_name.is_none() {
            self.pack_name = Some(pack.name.clone());
        }
        self.pack = Some(pack.clone());
        self
    }

    /// Render the full changelog, entries given newest first
    #[must_use]
    pub fn render(&self, entries: &[ChangelogEntry<'_>]) -> String {
        let mut blocks = Vec::new();

        if let Some(title) = &self.title {
            blocks.push(format!("# {title}"));
        }

        for entry in entries {
            blocks.extend(self.section_blocks(entry));
        }

        finish(&blocks)
    }

    /// Render a single release section
    #[must_use]
    pub fn render_section(&self, entry: &ChangelogEntry<'_>) -> String {
        finish(&self.section_blocks(entry))
    }

    fn section_blocks(&self, entry: &ChangelogEntry<'_>) -> Vec<String> {
        let note = entry.note;
        let mut blocks = vec![self.heading(&note.version)];

        if let Some(subtitle) = self.subtitle(note) {
            blocks.push(subtitle);
        }

        let (added, removed) = entry
            .delta
            .as_ref()
            .map(|delta| (delta.added.as_slice(), delta.removed.as_slice()))
            .unwrap_or_default();

        let sections: [(&str, &[String], bool); 6] = [
            ("Changes/Improvements ⭐", note.improvements.as_slice(), false),
            ("Update overview", note.overview.as_slice(), false),
            ("Bug Fixes 🪲", note.bug_fixes.as_slice(), false),
            ("Added Mods", added, true),
            ("Removed Mods", removed, true),
            ("Config Changes", note.config_changes.as_slice(), true),
        ];

        for (heading, lines, codify) in sections {
            if lines.is_empty() {
                continue;
            }
            blocks.push(format!("### {heading}"));
            blocks.push(if codify {
                bullet_list(&self.codify_all(lines))
            } else {
                bullet_list(lines)
            });
        }

        blocks
    }

    fn heading(&self, version: &str) -> String {
        let version = normalize_version(version);
        match &self.pack_name {
            Some(name) => format!("## {name} | {version}"),
            None => format!("## {version}"),
        }
    }

    fn subtitle(&self, note: &ReleaseNote) -> Option<String> {
        let mut parts = Vec::new();

        let loader = note
            .loader_version
            .as_deref()
            .or_else(|| self.pack_loader_for(&note.version));
        if let Some(loader) = loader {
            parts.push(format!("*{} {loader}*", self.loader_label));
        }
        if let Some(url) = self.mod_updates_link(&note.version) {
            parts.push(format!("*[Mod Updates]({url})*"));
        }

        (!parts.is_empty()).then(|| parts.join(" | "))
    }

    /// Expanded mod updates URL for a version, if configured
    #[must_use]
    pub fn mod_updates_link(&self, version: &str) -> Option<String> {
        self.mod_updates_url
            .as_deref()
            .map(|template| self.expand(template, version))
    }

    fn pack_loader_for(&self, version: &str) -> Option<&str> {
        self.pack
            .as_ref()
            .filter(|pack| same_version(&pack.version, version))
            .and_then(|pack| pack.loader_version.as_deref())
    }

    fn expand(&self, template: &str, version: &str) -> String {
        let values = TemplateValues {
            version: bare_version(version),
            pack: self.pack_name.as_deref(),
            minecraft: self
                .pack
                .as_ref()
                .and_then(|pack| pack.minecraft_version.as_deref()),
        };

        let url = expand_template(template, &values);
        if url.contains(PACK_PLACEHOLDER) || url.contains(MINECRAFT_PLACEHOLDER) {
            tracing::warn!(%url, "URL template has placeholders without a value");
        }
        url
    }

    fn codify_all(&self, lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .map(|line| codify_bracketed(line, self.keep_brackets))
            .collect()
    }
}

fn finish(blocks: &[String]) -> String {
    let mut document = blocks.join("\n\n");
    document.push('\n');
    document
}
