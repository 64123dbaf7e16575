//! Core extraction engine for Spotglow.
//!
//! This crate exposes the pieces the CLI wires together: configuration
//! resolution, the processed-file history, resolution-based orientation
//! classification, and the extraction run itself. The public API is
//! path-driven so every directory involved can be redirected in tests.

pub mod config;
pub mod extractor;
pub mod history;
pub mod orientation;
pub mod progress;

pub use config::{ConfigError, ExtractorConfig};
pub use extractor::{count_source_entries, run, ExtractError, RunStats, MIN_SIZE_KIB};
pub use history::{append_history, load_history, HistoryError};
pub use orientation::{
    classify_dimensions, Orientation, HORIZONTAL_RESOLUTION, VERTICAL_RESOLUTION,
};
