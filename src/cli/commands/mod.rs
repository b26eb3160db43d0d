//! Command implementations, one module per subcommand.

pub mod build;
pub mod config;
pub mod filter;
pub mod stats;
pub mod version;
