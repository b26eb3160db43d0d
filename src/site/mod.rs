//! Static site generation.
//!
//! [`generator`] drives a build end to end: import the catalog, reset the
//! output tree, write the embedded [`assets`], then render the index and
//! one detail page per listing through [`pages`]. [`stats`] aggregates
//! what a build produced.

pub mod assets;
pub mod generator;
pub mod pages;
pub mod stats;

pub use generator::{BuildMode, BuildReport, SiteGenerator};
pub use stats::BuildStats;
