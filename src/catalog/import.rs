//! Catalog import from the scrape CSV.
//!
//! The export is positional: map URL, name, rating, review-count text,
//! category, address, status, hours, an unused column, phone, image URL,
//! then any number of feature cells. The file may carry a UTF-8 BOM and
//! always starts with a header row, which is discarded. Rows too short to
//! carry a listing are counted and skipped, never fatal.

use anyhow::{Context, Result};
use std::path::Path;

use super::Catalog;
use super::record::Listing;
use super::slug::SlugRegistry;
use crate::config::DataSection;

/// Columns a row must have before it is treated as a listing.
const MIN_COLUMNS: usize = 10;

/// Read the catalog CSV at `path` into listings, in row order.
pub fn import_csv(path: &Path, data: &DataSection) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open catalog CSV {}", path.display()))?;

    let mut slugs = SlugRegistry::new();
    let mut listings = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;

    for (index, row) in reader.records().enumerate() {
        let row_number = index + 1;
        rows_read += 1;

        let record = match row {
            Ok(record) => record,
            Err(err) => {
                rows_skipped += 1;
                tracing::warn!(row = row_number, error = %err, "skipping unreadable CSV row");
                continue;
            }
        };
        if record.len() < MIN_COLUMNS {
            rows_skipped += 1;
            tracing::debug!(
                row = row_number,
                columns = record.len(),
                "skipping row with too few columns"
            );
            continue;
        }

        listings.push(build_listing(&record, row_number, data, &mut slugs));
    }

    tracing::info!(
        listings = listings.len(),
        rows = rows_read,
        skipped = rows_skipped,
        "imported catalog from {}",
        path.display()
    );

    Ok(Catalog {
        listings,
        rows_read,
        rows_skipped,
    })
}

fn build_listing(
    record: &csv::StringRecord,
    row_number: usize,
    data: &DataSection,
    slugs: &mut SlugRegistry,
) -> Listing {
    let raw_name = cell(record, 1);
    let name = if raw_name.is_empty() {
        format!("{} {row_number}", data.unnamed_label)
    } else {
        raw_name.to_string()
    };
    let slug = slugs.assign(&name, row_number);

    // Hours cells mix the schedule with interpunct separators.
    let hours = cell(record, 7).replace('·', "");
    let hours = hours.trim();

    let mut features: Vec<String> = Vec::new();
    for raw in record.iter().skip(11) {
        if let Some(feature) = clean_feature(raw, &data.feature_blocklist) {
            if !features.contains(&feature) {
                features.push(feature);
            }
        }
    }

    Listing {
        slug,
        name,
        map_url: cell(record, 0).to_string(),
        rating: cell(record, 2).parse::<f64>().ok(),
        review_count: parse_review_count(cell(record, 3)),
        category: cell(record, 4).to_string(),
        address: cell(record, 5).to_string(),
        status: non_empty(cell(record, 6)),
        hours: non_empty(hours),
        phone: non_empty(cell(record, 9)),
        image_url: non_empty(cell(record, 10)),
        features,
    }
}

fn cell<'a>(record: &'a csv::StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or("")
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Review counts arrive as display text ("1,234 reviews", "(56)"); only
/// the digits matter.
fn parse_review_count(text: &str) -> Option<u32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() { None } else { digits.parse().ok() }
}

/// Clean one raw feature cell, or reject it.
///
/// Rejected: empty cells, bare URLs, cells matching a blocklist term
/// (case-insensitive contains), and cells with no alphanumeric content.
fn clean_feature(raw: &str, blocklist: &[String]) -> Option<String> {
    let text = raw.trim().trim_matches('·').trim();
    if text.is_empty() || text.starts_with("http") {
        return None;
    }
    let lowered = text.to_lowercase();
    if blocklist
        .iter()
        .any(|term| lowered.contains(&term.to_lowercase()))
    {
        return None;
    }
    if !text.chars().any(char::is_alphanumeric) {
        return None;
    }
    Some(text.to_string())
}
