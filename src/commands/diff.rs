use std::path::Path;

use packlog::pipeline::ChangelogPipeline;

use crate::commands::CommandOptions;

pub struct Diff;

impl Diff {
    pub fn execute(old: &Path, new: &Path, options: &CommandOptions) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing diff command");
            println!("Old: {}", old.display());
            println!("New: {}", new.display());
        }

        let config = options.load_config()?;
        let pipeline = ChangelogPipeline::new(&config, None);

        let (delta, skipped) = pipeline.diff_directories(old, new)?;

        if options.verbose {
            println!("Mod changes: {}", delta.len());
        }

        print!("{}", pipeline.renderer().render_delta(&delta));

        let warnings: Vec<String> = skipped.iter().map(ToString::to_string).collect();
        options.report_warnings(&warnings)
    }
}
