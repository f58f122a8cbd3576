use std::path::Path;

use anyhow::Context;
use packlog::pipeline::ChangelogPipeline;

use crate::commands::CommandOptions;
use crate::commands::common::{load_pack, pack_name, resolve_version};

pub struct ReleaseNotes;

impl ReleaseNotes {
    pub fn execute(
        version: Option<&str>,
        output: Option<&Path>,
        options: &CommandOptions,
    ) -> anyhow::Result<()> {
        let config = options.load_config()?;
        let pack = load_pack(&config, options.verbose);

        let pipeline = ChangelogPipeline::new(&config, pack_name(&config, pack.as_ref()).as_deref())
            .with_pack(pack.as_ref());
        let load = pipeline.load_index()?;

        let note = match resolve_version(version, pack.as_ref()) {
            Some(version) => load
                .index
                .find(&version)
                .with_context(|| format!("No release note for version {version}"))?,
            None => load
                .index
                .latest()
                .context("No release notes found")?,
        };

        if options.verbose {
            println!("Executing release-notes command");
            println!("Version: {} ({})", note.version, note.release_type().as_str());
        }

        let document = pipeline.renderer().render_release_notes(note);
        let path = output.unwrap_or(&config.output.release_notes);
        options.write_document(path, &document)?;

        let mut warnings: Vec<String> = load.skipped.iter().map(ToString::to_string).collect();
        warnings.extend(load.warnings.iter().cloned());
        options.report_warnings(&warnings)
    }
}
