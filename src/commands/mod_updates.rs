use anyhow::Context;
use packlog::changelog::ChangelogRenderer;
use packlog::pipeline::ChangelogPipeline;

use crate::commands::CommandOptions;
use crate::commands::common::{load_pack, pack_name, resolve_version, snapshot_source};

pub struct ModUpdates;

impl ModUpdates {
    pub fn execute(
        version: Option<&str>,
        live_version: Option<&str>,
        options: &CommandOptions,
    ) -> anyhow::Result<()> {
        let config = options.load_config()?;
        let pack = load_pack(&config, options.verbose);

        let version = resolve_version(version, pack.as_ref())
            .context("No version given and no pack.toml version to fall back to")?;
        let live = resolve_version(live_version, pack.as_ref());

        if options.verbose {
            println!("Executing mod-updates command");
            println!("Version: {version}");
            println!("Live version: {}", live.as_deref().unwrap_or("(none)"));
        }

        let pipeline = ChangelogPipeline::new(&config, pack_name(&config, pack.as_ref()).as_deref())
            .with_pack(pack.as_ref());
        let load = pipeline.load_index()?;
        let snapshots = snapshot_source(&config);

        let result =
            pipeline.release_delta(&load.index, &version, live.as_deref(), snapshots.as_ref());

        let first_release = load
            .index
            .position(&version)
            .is_some_and(|position| load.index.previous(position).is_none());

        let mut warnings: Vec<String> = load.skipped.iter().map(ToString::to_string).collect();
        warnings.extend(load.warnings);
        warnings.extend(result.warnings);

        match result.delta {
            Some(delta) => {
                let document = pipeline.renderer().render_mod_updates(&version, &delta);
                let path = config
                    .output
                    .mod_updates_dir
                    .join(ChangelogRenderer::mod_updates_file_name(&version));
                options.write_document(&path, &document)?;
            }
            None if first_release => {
                println!("{version} has no previous release; no mod updates to write");
            }
            None => println!("Mod updates of {version} could not be computed"),
        }

        options.report_warnings(&warnings)
    }
}
