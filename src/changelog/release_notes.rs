//! Release notes for mod hosting platforms

use super::text::bullet_list;
use super::{ChangelogRenderer, finish};
use crate::release::ReleaseNote;

const PRE_RELEASE_BANNER: &str = "**This is a pre-release. Here be dragons!**";

impl ChangelogRenderer {
    /// Render the short release description uploaded with a build
    ///
    /// Alpha and beta versions open with a pre-release banner. The update
    /// overview follows, falling back to the improvements when no overview
    /// was written.
    #[must_use]
    pub fn render_release_notes(&self, note: &ReleaseNote) -> String {
        let mut blocks = Vec::new();

        if note.release_type().is_prerelease() {
            blocks.push(PRE_RELEASE_BANNER.to_string());
        }

        let summary = if note.overview.is_empty() {
            &note.improvements
        } else {
            &note.overview
        };
        if !summary.is_empty() {
            blocks.push(bullet_list(summary));
        }

        if let Some(template) = &self.full_changelog_url {
            let url = self.expand(template, &note.version);
            blocks.push(format!("#### **[Full Changelog]({url})**"));
        }

        finish(&blocks)
    }
}
