use std::path::Path;

use anyhow::Context;
use packlog::pipeline::{ChangelogPipeline, PipelineReporter};

use crate::commands::CommandOptions;
use crate::commands::common::{load_pack, pack_name, resolve_version, snapshot_source};

pub struct Changelog;

impl Changelog {
    pub fn execute(
        live_version: Option<&str>,
        output: Option<&Path>,
        options: &CommandOptions,
    ) -> anyhow::Result<()> {
        let config = options.load_config()?;
        let pack = load_pack(&config, options.verbose);

        // The working manifests belong to the version being prepared
        let live = resolve_version(live_version, pack.as_ref());

        if options.verbose {
            println!("Executing changelog command");
            println!("Notes: {}", config.notes.dir.display());
            println!("Live manifests: {}", config.manifests.dir.display());
            println!("Live version: {}", live.as_deref().unwrap_or("(none)"));
        }

        let pipeline = ChangelogPipeline::new(&config, pack_name(&config, pack.as_ref()).as_deref())
            .with_pack(pack.as_ref());
        let snapshots = snapshot_source(&config);

        let report = pipeline
            .build(live.as_deref(), snapshots.as_ref())
            .context("Failed to build changelog")?;

        let path = output.unwrap_or(&config.output.changelog);
        options.write_document(path, &report.document)?;

        let summary = PipelineReporter::generate_summary(&report);
        println!("{summary}");

        options.check_strict(&report.warnings)
    }
}
