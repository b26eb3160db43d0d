//! Site configuration.
//!
//! Typed sections with defaults, merged with `vitrine.toml` and
//! `VITRINE_*` environment variables through figment. The merged result
//! is validated before a build runs.

pub mod core;
pub mod defaults;

pub use core::{CONFIG_FILE_NAME, SiteConfig};
pub use defaults::{BuildSection, DataSection, OutputSection, RenderSection, SiteSection};
