//! Texture synthesis from animation frames
//!
//! Pass one scales and measures every frame, pass two crops each tile out of
//! every frame and stacks the crops into animated texture strips.

/// Frame scaling and tile layout
pub mod scaling;
/// Per-tile texture strip synthesis
pub mod synthesis;

pub use scaling::{Axis, ScalingContext, TileLayout, round_down_to_cell};
pub use synthesis::{AnimatedTexture, SynthesizedShow, synthesize};
