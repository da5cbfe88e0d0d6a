//! In-memory host world for assembling screens
//!
//! Stores committed cells by position. Placement takes `&mut self`, so the
//! decision and the commit of one cell happen without any other placement in
//! between.

use std::collections::HashMap;
use tracing::trace;

use crate::assembly::placement::{CellPos, Neighbor, NeighborLookup, Placement, state_for_placement};
use crate::assembly::state::CellState;
use crate::show::display::DisplayId;
use crate::show::properties::ShowProperties;
use crate::spatial::orientation::Orientation;

/// A committed screen cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedCell {
    /// Show the cell belongs to
    pub display: DisplayId,
    /// State decided at placement time
    pub state: CellState,
}

/// Sparse set of committed cells
#[derive(Debug, Clone, Default)]
pub struct ScreenWorld {
    cells: HashMap<CellPos, PlacedCell>,
}

impl ScreenWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide and commit the state of a new cell of `props`' show
    ///
    /// Returns `None` and leaves the world unchanged when `position` already
    /// holds a cell. Committed cells only change by being removed.
    pub fn place(
        &mut self,
        props: &ShowProperties,
        position: CellPos,
        agent: Orientation,
    ) -> Option<CellState> {
        if let Some(existing) = self.cells.get(&position) {
            trace!("{position} already holds {}", existing.state);
            return None;
        }

        let state = state_for_placement(props, &Placement::new(position, agent), self);
        trace!("committed {state} at {position}");
        self.cells.insert(
            position,
            PlacedCell {
                display: props.display(),
                state,
            },
        );
        Some(state)
    }

    /// Committed cell at `position`
    pub fn get(&self, position: CellPos) -> Option<PlacedCell> {
        self.cells.get(&position).copied()
    }

    /// Remove the cell at `position`
    ///
    /// Other cells keep their state; nothing is re-evaluated.
    pub fn remove(&mut self, position: CellPos) -> Option<PlacedCell> {
        self.cells.remove(&position)
    }

    /// Number of committed cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is committed
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl NeighborLookup for ScreenWorld {
    fn neighbor(&self, position: CellPos, display: DisplayId) -> Neighbor {
        match self.cells.get(&position) {
            None => Neighbor::Empty,
            Some(cell) if cell.display == display => Neighbor::Committed(cell.state),
            Some(_) => Neighbor::OtherShow,
        }
    }
}
