use anyhow::Context;

use crate::commands::CommandOptions;

pub struct Config;

impl Config {
    pub fn execute(options: &CommandOptions) -> anyhow::Result<()> {
        if options.verbose {
            println!("Executing config command");
        }

        let config = options.load_config()?;
        let rendered =
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?;

        print!("{rendered}");
        Ok(())
    }
}
