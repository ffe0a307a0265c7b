#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

uniffi::setup_scaffolding!();

pub mod codec;
pub mod error;
pub mod ffi;
pub mod menu;
pub mod models;
pub mod range;
pub mod set;
pub mod store;

// Re-export common types for convenience
pub use error::{
    HighlightError, HighlightResult, SerializationError, SerializationResult, StoreError,
    StoreResult,
};
pub use models::{HighlightState, Rgba};
pub use range::TextRange;
pub use set::{RangeSet, StyleRun};
