//! Run the filter engine against the catalog from the command line.
//!
//! The same engine the generated pages mirror, wired the explicit way:
//! fixed-value sources for the three inputs and a recording sink for the
//! results.

use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::path::Path;

use crate::catalog;
use crate::config::SiteConfig;
use crate::filter::{FilterEngine, FixedValue, RecordingSink};

#[derive(Args)]
pub struct FilterArgs {
    /// Free-text search over name, address, category and features
    #[arg(long, default_value = "")]
    pub query: String,

    /// Exact status a listing must carry
    #[arg(long, default_value = "")]
    pub status: String,

    /// Exact category a listing must carry
    #[arg(long, default_value = "")]
    pub category: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FilterFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum FilterFormat {
    /// One line per visible listing, then the count
    Text,
    /// JSON with the state, the visible slugs, and the count
    Json,
    /// Just the visible count
    Count,
}

pub async fn execute(args: FilterArgs, config_path: Option<&Path>) -> Result<()> {
    let config = SiteConfig::load(config_path)?;
    let catalog = catalog::import_csv(&config.data.csv, &config.data)?;

    let mut engine = FilterEngine::new(catalog.cards(), RecordingSink::new())
        .with_query(FixedValue::new(&args.query))
        .with_status(FixedValue::new(&args.status))
        .with_category(FixedValue::new(&args.category));
    let state = engine.state();
    let outcome = engine.refresh();

    match args.format {
        FilterFormat::Count => println!("{}", outcome.visible_count),
        FilterFormat::Json => {
            let visible: Vec<&str> = outcome
                .visible_indices()
                .map(|index| catalog.listings[index].slug.as_str())
                .collect();
            let body = json!({
                "state": state,
                "visible": visible,
                "count": outcome.visible_count,
                "total": catalog.len(),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        FilterFormat::Text => {
            for index in outcome.visible_indices() {
                let listing = &catalog.listings[index];
                let status = listing.status.as_deref().unwrap_or("-");
                println!(
                    "{} | {} | {} | {}",
                    listing.name, listing.category, listing.address, status
                );
            }
            println!("{} of {} visible", outcome.visible_count, catalog.len());
        }
    }
    Ok(())
}
