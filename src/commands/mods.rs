use std::path::Path;

use packlog::pipeline::ChangelogPipeline;

use crate::commands::CommandOptions;

pub struct Mods;

impl Mods {
    pub fn execute(dir: Option<&Path>, options: &CommandOptions) -> anyhow::Result<()> {
        let config = options.load_config()?;
        let dir = dir.unwrap_or(&config.manifests.dir);

        if options.verbose {
            println!("Executing mods command");
            println!("Manifests: {}", dir.display());
        }

        let pipeline = ChangelogPipeline::new(&config, None);
        let load = pipeline.reader().load_snapshot(dir)?;

        if options.verbose && !load.excluded.is_empty() {
            println!("Excluded (inactive side): {}", load.excluded.join(", "));
        }

        print!(
            "{}",
            pipeline.renderer().render_active_mods(&load.snapshot.active_mods())
        );

        let warnings: Vec<String> = load.skipped.iter().map(ToString::to_string).collect();
        options.report_warnings(&warnings)
    }
}
