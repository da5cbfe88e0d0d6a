//! Animated screen textures assembled from grids of placed cells
//!
//! The texture side cuts every frame of an animated image into a grid of
//! cell-sized tiles and stacks each tile's crops into an animated strip. The
//! assembly side decides, for each newly placed cell, which tile of which
//! show it renders and which way the whole screen faces, from the committed
//! state of its neighbours alone.

#![forbid(unsafe_code)]

/// Grid assembly decision and cell state domain
pub mod assembly;
/// Input/output operations and error handling
pub mod io;
/// Show configuration and registry
pub mod show;
/// Directions, orientations and tile coordinates
pub mod spatial;
/// Frame scaling and texture strip synthesis
pub mod texture;

pub use io::error::{CinetileError, Result};
