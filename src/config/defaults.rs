//! Typed configuration sections and their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::site::BuildMode;

/// Page identity and copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteSection {
    /// Site title, used on the index page and in detail page titles
    pub title: String,

    /// Short banner line; `{count}` expands to the number of listings
    pub tagline: String,

    /// Lead paragraph under the index title
    pub subtitle: String,

    /// Value of the html lang attribute
    pub language: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Local Directory".to_string(),
            tagline: "Freshly generated · {count} listings in one place".to_string(),
            subtitle: "Pick a card to open its page, or jump straight to the map.".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Where the catalog comes from and how rows are cleaned up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataSection {
    /// Catalog CSV path, relative to the working directory
    pub csv: PathBuf,

    /// Display-name prefix for rows with an empty name cell
    pub unnamed_label: String,

    /// Feature cells containing any of these terms are dropped
    /// (case-insensitive)
    pub feature_blocklist: Vec<String>,

    /// Status text containing any of these marks a listing as open
    pub open_markers: Vec<String>,
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            csv: PathBuf::from("listings.csv"),
            unnamed_label: "Unnamed listing".to_string(),
            // The scrapes this tool grew up on mark ads in Chinese
            feature_blocklist: vec!["sponsored".to_string(), "廣告".to_string()],
            open_markers: vec!["Open".to_string(), "營業".to_string()],
        }
    }
}

/// Output tree layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    /// Root of the generated site (reset on every build)
    pub directory: PathBuf,

    /// Subdirectory for the stylesheet and filter script
    pub assets_dir: String,

    /// Subdirectory holding one page per listing
    pub listings_dir: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("docs"),
            assets_dir: "assets".to_string(),
            listings_dir: "listings".to_string(),
        }
    }
}

/// Page rendering knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderSection {
    /// Image used on index cards when a listing has none
    pub card_image_placeholder: String,

    /// Image used on detail heroes when a listing has none
    pub hero_image_placeholder: String,

    /// How many feature chips an index card shows at most
    pub max_feature_chips: usize,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            card_image_placeholder: "https://via.placeholder.com/400x250?text=Listing".to_string(),
            hero_image_placeholder: "https://via.placeholder.com/800x450?text=Listing".to_string(),
            max_feature_chips: 4,
        }
    }
}

/// Build execution strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildSection {
    /// Sequential, parallel, or pick by listing count
    pub mode: BuildMode,

    /// Minimum listings before auto mode goes parallel
    pub min_listings_for_parallel: usize,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            mode: BuildMode::Auto,
            min_listings_for_parallel: 50,
        }
    }
}
