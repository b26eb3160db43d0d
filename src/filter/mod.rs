//! Card filtering.
//!
//! A free-text query plus two discrete dimensions (status, category)
//! decide which cards stay visible. [`engine`] holds the pure predicate
//! and batch pass, [`ports`] the seams to the host, and [`binding`] the
//! wired engine that ties a card collection to live inputs. The script
//! emitted by [`site::assets`](crate::site::assets) implements the same
//! contract in the generated pages.

pub mod binding;
pub mod card;
pub mod engine;
pub mod ports;
pub mod state;

pub use binding::FilterEngine;
pub use card::Card;
pub use engine::{FilterOutcome, apply_all, evaluate};
pub use ports::{FixedValue, RecordingSink, ValueSource, VisibilitySink};
pub use state::FilterState;
