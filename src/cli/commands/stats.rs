//! Catalog and output inspection.

use anyhow::Result;
use clap::Args;
use std::path::Path;
use walkdir::WalkDir;

use crate::catalog::{self, Catalog};
use crate::cli::Output;
use crate::config::SiteConfig;

#[derive(Args, Default)]
pub struct StatsArgs {
    /// List every distinct category and status, not just the counts
    #[arg(long)]
    pub full: bool,
}

pub async fn execute(args: StatsArgs, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let config = SiteConfig::load(config_path)?;
    let catalog = catalog::import_csv(&config.data.csv, &config.data)?;

    output.header("Catalog");
    output.key_value("Source:", &config.data.csv.display().to_string(), false);
    output.key_value("Listings:", &catalog.len().to_string(), true);
    output.key_value("Rows skipped:", &catalog.rows_skipped.to_string(), catalog.rows_skipped > 0);
    output.key_value("Categories:", &catalog.categories().len().to_string(), false);
    output.key_value("Statuses:", &catalog.statuses().len().to_string(), false);
    output.key_value("With phone:", &coverage(&catalog, |l| l.phone.is_some()), false);
    output.key_value("With rating:", &coverage(&catalog, |l| l.rating.is_some()), false);
    output.key_value("With image:", &coverage(&catalog, |l| l.image_url.is_some()), false);

    if args.full {
        output.header("Categories");
        for category in catalog.categories() {
            output.list_item(&category);
        }
        output.header("Statuses");
        for status in catalog.statuses() {
            output.list_item(&status);
        }
    }

    output.header("Output");
    let out_dir = &config.output.directory;
    if out_dir.is_dir() {
        let (pages, bytes) = measure_output(out_dir);
        output.key_value("Directory:", &out_dir.display().to_string(), false);
        output.key_value("Pages:", &pages.to_string(), true);
        output.key_value("Size:", &crate::site::stats::format_bytes(bytes), false);
    } else {
        output.key_value("Directory:", &format!("{} (not built yet)", out_dir.display()), false);
    }

    Ok(())
}

fn coverage(catalog: &Catalog, has: impl Fn(&crate::catalog::Listing) -> bool) -> String {
    let count = catalog.listings.iter().filter(|l| has(l)).count();
    format!("{count}/{}", catalog.len())
}

/// Count generated HTML pages and total any file's bytes under `out_dir`.
fn measure_output(out_dir: &Path) -> (usize, u64) {
    let mut pages = 0usize;
    let mut bytes = 0u64;
    for entry in WalkDir::new(out_dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(metadata) = entry.metadata() {
            bytes += metadata.len();
        }
        if entry.path().extension().is_some_and(|ext| ext == "html") {
            pages += 1;
        }
    }
    (pages, bytes)
}
