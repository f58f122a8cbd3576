mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use commands::CommandOptions;
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.verbose {
        println!("Verbose mode enabled");
        println!("Dry run: {}", cli.dry_run);
        println!("Strict: {}", cli.strict);
    }

    let options = CommandOptions::new(
        cli.verbose,
        cli.dry_run,
        cli.strict,
        cli.config.as_deref(),
        cli.no_config,
    );

    match &cli.command {
        Commands::Changelog {
            live_version,
            output,
        } => {
            commands::Changelog::execute(live_version.as_deref(), output.as_deref(), &options)
                .context("Failed to execute changelog command")?;
        }
        Commands::Diff { old, new } => {
            commands::Diff::execute(old, new, &options).context("Failed to execute diff command")?;
        }
        Commands::Mods { dir } => {
            commands::Mods::execute(dir.as_deref(), &options)
                .context("Failed to execute mods command")?;
        }
        Commands::ModUpdates {
            version,
            live_version,
        } => {
            commands::ModUpdates::execute(version.as_deref(), live_version.as_deref(), &options)
                .context("Failed to execute mod-updates command")?;
        }
        Commands::ReleaseNotes { version, output } => {
            commands::ReleaseNotes::execute(version.as_deref(), output.as_deref(), &options)
                .context("Failed to execute release-notes command")?;
        }
        Commands::Config => {
            commands::Config::execute(&options).context("Failed to execute config command")?;
        }
    }

    Ok(())
}
