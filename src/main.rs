//! Folio - query portfolio content from the command line.

use anyhow::Result;
use clap::Parser;
use folio::cli::Cli;
use folio::commands;
use folio::config::FolioConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    commands::run(&cli, &config)
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error; defaults apply.
fn load_config(cli: &Cli) -> Result<FolioConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        FolioConfig::from_path(&config_path)?
    } else {
        FolioConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
