//! Grid assembly of placed screen cells
//!
//! Decides which tile of which show each newly placed cell renders, from the
//! committed state of its neighbours alone.

/// Neighbour-driven cell state decision
pub mod placement;
/// Closed domain of cell states
pub mod registry;
/// Cell state value type
pub mod state;
/// In-memory host of committed cells
pub mod world;

pub use placement::{CellPos, Neighbor, NeighborLookup, Placement, state_for_placement};
pub use registry::StateRegistry;
pub use state::CellState;
pub use world::{PlacedCell, ScreenWorld};
