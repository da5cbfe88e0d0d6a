//! Show configuration
//!
//! A show is one animated image assigned to one of a fixed set of screens.

/// Screen identifiers
pub mod display;
/// Validated per-show configuration
pub mod properties;
/// Immutable show lookup by display
pub mod registry;

pub use display::DisplayId;
pub use properties::{AnimationMetadata, ShowProperties};
pub use registry::ShowRegistry;
