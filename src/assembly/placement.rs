//! Cell state decision for a newly placed screen cell
//!
//! A placed cell looks at its six axis-aligned neighbours in canonical
//! direction order. The first neighbour of the same show from which the new
//! cell lies along one of that neighbour's growth directions, and whose
//! extension stays inside the show's grid, decides the new state. Without
//! such a neighbour the cell starts a new screen as its bottom-left tile,
//! facing the agent that placed it. Screens grow rightwards and upwards
//! from there.
//!
//! The decision reads committed neighbour state only and never fails. The
//! host is expected to make the read-then-commit of one placement atomic.

use std::fmt;
use tracing::debug;

use crate::assembly::state::CellState;
use crate::show::display::DisplayId;
use crate::show::properties::ShowProperties;
use crate::spatial::direction::Direction;
use crate::spatial::extension::{GrowthAxis, growth_directions};
use crate::spatial::orientation::Orientation;

/// Integer position of a cell in the host world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    /// East-west coordinate (east positive)
    pub x: i32,
    /// Vertical coordinate (up positive)
    pub y: i32,
    /// North-south coordinate (south positive)
    pub z: i32,
}

impl CellPos {
    /// Create a position
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The adjacent position one step in `direction`
    ///
    /// `None` at the edge of the coordinate range.
    pub fn relative(self, direction: Direction) -> Option<Self> {
        let [dx, dy, dz] = direction.offset();
        Some(Self::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.z.checked_add(dz)?,
        ))
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// What occupies a neighbouring position, as seen by one show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    /// No cell
    Empty,
    /// A cell that does not belong to the show being placed
    OtherShow,
    /// A cell of the same show with its committed state
    Committed(CellState),
}

/// Read access to committed cells around a placement
pub trait NeighborLookup {
    /// What occupies `position`, relative to `display`'s show
    fn neighbor(&self, position: CellPos, display: DisplayId) -> Neighbor;
}

/// A single cell placement request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Where the new cell is placed
    pub position: CellPos,
    /// Orientation of the agent placing the cell
    pub agent: Orientation,
}

impl Placement {
    /// Create a placement request
    pub const fn new(position: CellPos, agent: Orientation) -> Self {
        Self { position, agent }
    }
}

/// Decide the state a newly placed cell must adopt
///
/// Probes neighbours in [`Direction::ALL`] order and returns the first valid
/// extension. Conflicting neighbours are not reconciled: earlier directions
/// win. Falls back to a new bottom-left anchor facing the agent.
pub fn state_for_placement(
    props: &ShowProperties,
    placement: &Placement,
    world: &impl NeighborLookup,
) -> CellState {
    Direction::ALL
        .into_iter()
        .find_map(|direction| extend_from(props, placement.position, direction, world))
        .unwrap_or_else(|| {
            debug!(
                "{}: anchoring new screen at {} for agent facing {}",
                props.display(),
                placement.position,
                placement.agent
            );
            anchor_state(props, placement.agent)
        })
}

/// State of the first cell of a new screen
///
/// Bottom-left tile, facing back towards the agent.
pub const fn anchor_state(props: &ShowProperties, agent: Orientation) -> CellState {
    CellState::new(0, props.blocks_y().saturating_sub(1), agent.opposite())
}

/// Candidate state from the neighbour that the new cell extends in `direction`
///
/// The neighbour lies one step against `direction`. Returns `None` when it is
/// not a committed cell of the same show, `direction` is not one of its growth
/// directions, or the extension leaves the grid. A neighbour position outside
/// the coordinate range counts as empty.
pub fn extend_from(
    props: &ShowProperties,
    position: CellPos,
    direction: Direction,
    world: &impl NeighborLookup,
) -> Option<CellState> {
    let Neighbor::Committed(neighbor) =
        world.neighbor(position.relative(direction.opposite())?, props.display())
    else {
        return None;
    };

    let orientation = neighbor.orientation();
    let candidate = match growth_directions(orientation).axis_of(direction)? {
        GrowthAxis::X => CellState::new(neighbor.x().checked_add(1)?, neighbor.y(), orientation),
        GrowthAxis::Y => CellState::new(neighbor.x(), neighbor.y().checked_sub(1)?, orientation),
    };

    if candidate.x() >= props.blocks_x() {
        return None;
    }

    debug!(
        "{}: {} extends {neighbor} {direction} to {candidate}",
        props.display(),
        position
    );
    Some(candidate)
}
