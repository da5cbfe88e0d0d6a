//! Closed domain of every legal cell state
//!
//! Hosts that store per-cell state often need every legal value declared
//! before the first cell is placed. The registry enumerates the Cartesian
//! product of tile columns, tile rows and the twelve orientations once, and
//! never grows afterwards.

use ndarray::Array2;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::assembly::state::CellState;
use crate::io::configuration::{BLOCKS_X_MAX, BLOCKS_Y_MAX};
use crate::spatial::orientation::Orientation;

static GLOBAL: LazyLock<StateRegistry> =
    LazyLock::new(|| StateRegistry::new(BLOCKS_X_MAX, BLOCKS_Y_MAX));

/// Immutable set of all cell states for a `width` x `height` grid
#[derive(Debug, Clone)]
pub struct StateRegistry {
    /// Indexed by `(x, y)`, one state per orientation in [`Orientation::ALL`] order
    grid: Array2<[CellState; 12]>,
    ordered: Vec<CellState>,
    by_name: HashMap<String, CellState>,
}

impl StateRegistry {
    /// Enumerate every state with `x < width` and `y < height`
    pub fn new(width: u32, height: u32) -> Self {
        let grid = Array2::from_shape_fn((width as usize, height as usize), |(x, y)| {
            Orientation::ALL.map(|orientation| CellState::new(x as u32, y as u32, orientation))
        });

        let mut ordered: Vec<CellState> = grid.iter().flatten().copied().collect();
        ordered.sort_unstable();
        let by_name = ordered
            .iter()
            .map(|state| (state.to_string(), *state))
            .collect();

        Self {
            grid,
            ordered,
            by_name,
        }
    }

    /// The registry for the largest grid any show may use
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Number of tile columns covered
    pub fn width(&self) -> u32 {
        self.grid.dim().0 as u32
    }

    /// Number of tile rows covered
    pub fn height(&self) -> u32 {
        self.grid.dim().1 as u32
    }

    /// Total number of states
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether the domain is empty (a zero-sized grid)
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// The registered state for a coordinate and orientation
    pub fn get(&self, x: u32, y: u32, orientation: Orientation) -> Option<CellState> {
        self.grid
            .get((x as usize, y as usize))
            .and_then(|states| states.get(orientation.index()))
            .copied()
    }

    /// The registered state with the given `{x}_{y}_{orientation}` name
    pub fn by_name(&self, name: &str) -> Option<CellState> {
        self.by_name.get(name).copied()
    }

    /// Whether `state` belongs to the domain
    pub fn contains(&self, state: &CellState) -> bool {
        self.get(state.x(), state.y(), state.orientation()).as_ref() == Some(state)
    }

    /// Every state, ordered by `(x, y, orientation name)`
    pub fn states(&self) -> &[CellState] {
        &self.ordered
    }

    /// Every state name, in the order of [`Self::states`]
    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        self.ordered.iter().map(CellState::to_string)
    }
}
