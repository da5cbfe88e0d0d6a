//! Spatial primitives for screens
//!
//! This module contains spatial-related functionality including:
//! - World directions and look-vector ranking
//! - Screen orientations
//! - The extension table of legal growth directions
//! - Tile coordinate iteration

/// World directions
pub mod direction;
/// Legal growth directions per orientation
pub mod extension;
/// Compass-plus-tilt screen orientation
pub mod orientation;
/// Tile coordinate iteration
pub mod tiles;

pub use direction::Direction;
pub use extension::{GrowthAxis, GrowthDirections, growth_directions};
pub use orientation::{Compass, Orientation, Tilt};
pub use tiles::{TilePosition, TilePositions};
