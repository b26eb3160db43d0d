//! # Vitrine - Static directory sites with client-side card filtering
//!
//! Vitrine turns a scraped listings CSV into a static directory site: an
//! index of filterable cards plus one detail page per listing. The card
//! filter — free-text query over a lower-cased corpus, exact status and
//! category selects — exists twice by design: once as the pure Rust
//! engine in [`filter`], and once as the small script embedded in every
//! generated page. Both implement the same contract, and the index page
//! is seeded with the Rust engine's initial count.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default vitrine.toml
//! vitrine config init
//!
//! # Build the site from listings.csv into docs/
//! vitrine build
//!
//! # Query the catalog the way the page filter would
//! vitrine filter --query cafe --status Open
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod filter;
pub mod site;

pub use cli::{Cli, Output};
pub use config::SiteConfig;

/// Result type alias for vitrine operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
