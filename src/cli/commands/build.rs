//! The build command: catalog CSV in, static site out.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use crate::cli::Output;
use crate::config::SiteConfig;
use crate::site::{BuildMode, BuildReport, SiteGenerator};

#[derive(Args)]
pub struct BuildArgs {
    /// Catalog CSV path, overriding the configured one
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Output directory, overriding the configured one
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Render detail pages one at a time even when the catalog is large
    #[arg(long)]
    pub sequential: bool,

    /// Keep files already in the output directory instead of resetting it
    #[arg(long)]
    pub no_clean: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// One-line result with warnings
    Summary,
    /// Full build statistics
    Detailed,
    /// JSON for machine processing
    Json,
}

pub async fn execute(args: BuildArgs, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let mut config = SiteConfig::load(config_path)?;
    if let Some(csv) = args.csv {
        config.data.csv = csv;
    }
    if let Some(out) = args.out {
        config.output.directory = out;
    }
    if args.sequential {
        config.build.mode = BuildMode::Sequential;
    }
    config.validate()?;

    let mut generator = SiteGenerator::new(config.clone());
    if args.no_clean {
        generator = generator.keep_output();
    }

    let spinner = output.spinner("Building site...");
    let built = generator.build();
    spinner.finish_and_clear();
    let report = built?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Summary => print_summary(&report, &config, output),
        OutputFormat::Detailed => print_detailed(&report, &config, output),
    }

    // Index alone is not a site; signal empty builds to scripts.
    if report.stats.pages_written <= 1 {
        output.warning("no listing pages were written");
        std::process::exit(1);
    }
    Ok(())
}

fn print_summary(report: &BuildReport, config: &SiteConfig, output: &Output) {
    output.success(&format!(
        "Built {} — {}",
        config.output.directory.display(),
        report.stats.summary()
    ));
    for warning in &report.warnings {
        output.warning(warning);
    }
}

fn print_detailed(report: &BuildReport, config: &SiteConfig, output: &Output) {
    let stats = &report.stats;
    output.header("Build");
    output.key_value("Output:", &config.output.directory.display().to_string(), true);
    output.key_value("Rows read:", &stats.rows_read.to_string(), false);
    output.key_value("Rows skipped:", &stats.rows_skipped.to_string(), stats.rows_skipped > 0);
    output.key_value("Listings:", &stats.listings.to_string(), false);
    output.key_value("Categories:", &stats.distinct_categories.to_string(), false);
    output.key_value("Statuses:", &stats.distinct_statuses.to_string(), false);
    output.key_value("Pages written:", &stats.pages_written.to_string(), false);
    output.key_value("Pages failed:", &stats.pages_failed.to_string(), stats.pages_failed > 0);
    output.key_value(
        "Bytes written:",
        &crate::site::stats::format_bytes(stats.bytes_written),
        false,
    );
    output.key_value(
        "Duration:",
        &crate::site::stats::format_duration(stats.duration_ms),
        false,
    );

    if !report.warnings.is_empty() {
        output.header("Warnings");
        for warning in &report.warnings {
            output.list_item(warning);
        }
    }
}
