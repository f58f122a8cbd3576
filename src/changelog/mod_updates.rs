//! Per-release mod update documents and active mod lists

use super::text::{bare_version, bullet_list, codify_bracketed, normalize_version};
use super::{ChangelogRenderer, finish};
use crate::delta::DeltaResult;

impl ChangelogRenderer {
    /// File name of the mod updates document for a version
    #[must_use]
    pub fn mod_updates_file_name(version: &str) -> String {
        format!("changelog_mods_{}.md", bare_version(version))
    }

    /// Render the mod updates document of one release
    ///
    /// Unlike the changelog section this lists modified mods with their old
    /// and new tracked versions.
    #[must_use]
    pub fn render_mod_updates(&self, version: &str, delta: &DeltaResult) -> String {
        let version = normalize_version(version);
        let mut blocks = vec![match &self.pack_name {
            Some(name) => format!("# {name} {version} Mod Updates"),
            None => format!("# {version} Mod Updates"),
        }];
        blocks.extend(self.delta_blocks(delta));

        finish(&blocks)
    }

    /// Render the added/removed/updated sections of a delta
    #[must_use]
    pub fn render_delta(&self, delta: &DeltaResult) -> String {
        finish(&self.delta_blocks(delta))
    }

    fn delta_blocks(&self, delta: &DeltaResult) -> Vec<String> {
        if delta.is_empty() {
            return vec!["No mod changes.".to_string()];
        }

        let updated: Vec<String> = delta
            .modified
            .iter()
            .map(|m| format!("{}: `{}` → `{}`", m.name, m.old_version, m.new_version))
            .collect();

        let mut blocks = Vec::new();
        for (heading, lines) in [
            ("Added Mods", self.codify_all(&delta.added)),
            ("Removed Mods", self.codify_all(&delta.removed)),
            ("Updated Mods", updated),
        ] {
            if lines.is_empty() {
                continue;
            }
            blocks.push(format!("### {heading}"));
            blocks.push(bullet_list(&lines));
        }

        blocks
    }

    /// Render a list of active mods as a bullet list
    #[must_use]
    pub fn render_active_mods(&self, mods: &[String]) -> String {
        let lines: Vec<String> = mods
            .iter()
            .map(|name| codify_bracketed(name, self.keep_brackets))
            .collect();
        finish(&[bullet_list(&lines)])
    }
}
