//! Configuration management: init, show, validate.

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use crate::cli::Output;
use crate::config::{CONFIG_FILE_NAME, SiteConfig};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a default vitrine.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Display the current merged configuration
    Show {
        /// Output format: toml or json
        #[arg(short, long, default_value = "toml")]
        format: String,
    },
    /// Validate the configuration file
    Validate,
}

pub async fn execute(args: ConfigArgs, config_path: Option<&Path>, output: &Output) -> Result<()> {
    match args.command {
        ConfigCommand::Init { force } => {
            let path = config_path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
            SiteConfig::write_default(&path, force)?;
            output.success(&format!("Wrote {}", path.display()));
            Ok(())
        }
        ConfigCommand::Show { format } => {
            let config = SiteConfig::load(config_path)?;
            let rendered = match format.to_lowercase().as_str() {
                "toml" => config.to_toml()?,
                "json" => config.to_json()?,
                other => bail!("unsupported format: {other} (use toml or json)"),
            };
            println!("{rendered}");
            Ok(())
        }
        ConfigCommand::Validate => {
            let config = SiteConfig::load(config_path)?;
            config.validate()?;
            output.success("Configuration is valid");
            Ok(())
        }
    }
}
