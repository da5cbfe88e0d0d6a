//! Input/output operations and error handling

/// Command-line interface and batch driver
pub mod cli;
/// Limits, file names and defaults
pub mod configuration;
/// Crate error type
pub mod error;
/// Frame loading and texture export
pub mod image;
/// Batch progress display
pub mod progress;
