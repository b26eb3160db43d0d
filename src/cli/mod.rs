//! Command-line interface.
//!
//! Argument parsing with clap derive, one module per subcommand, and a
//! shared styled-output handler. Global flags cover working directory,
//! verbosity, quiet mode, and an explicit config file.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
mod output;

pub use output::Output;

/// vitrine - static directory sites with client-side card filtering
#[derive(Parser)]
#[command(
    name = "vitrine",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a static directory site with client-side card filtering",
    long_about = "Vitrine turns a scraped listings CSV into a static site: an index \
                  of filterable cards plus one detail page per listing. The filter \
                  engine behind the generated pages is also available from the \
                  command line."
)]
pub struct Cli {
    /// Run as if started in <DIR> instead of the current working directory
    #[arg(short = 'C', long = "directory", global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the site from the catalog CSV
    Build(commands::build::BuildArgs),
    /// Run the filter engine against the catalog from the command line
    Filter(commands::filter::FilterArgs),
    /// Inspect the catalog and the generated output
    Stats(commands::stats::StatsArgs),
    /// Configuration management
    Config(commands::config::ConfigArgs),
    /// Show version information
    Version(commands::version::VersionArgs),
}

impl Cli {
    /// Execute the parsed command.
    pub async fn run(self) -> Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.quiet);
        let config_path = self.config.as_deref();

        match self.command {
            Some(Commands::Build(args)) => {
                commands::build::execute(args, config_path, &output).await
            }
            Some(Commands::Filter(args)) => commands::filter::execute(args, config_path).await,
            Some(Commands::Stats(args)) => {
                commands::stats::execute(args, config_path, &output).await
            }
            Some(Commands::Config(args)) => {
                commands::config::execute(args, config_path, &output).await
            }
            Some(Commands::Version(args)) => commands::version::execute(args).await,
            None => {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

/// Map `-v` counts onto an `EnvFilter`, unless `RUST_LOG` already says
/// otherwise. Quiet mode installs no subscriber at all.
fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
