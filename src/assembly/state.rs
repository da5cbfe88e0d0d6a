//! Per-cell screen state

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::io::error::CinetileError;
use crate::spatial::orientation::Orientation;
use crate::spatial::tiles::TilePosition;

/// The role one placed cell plays in an assembled screen
///
/// The cell renders tile `(x, y)` of its show, and the whole screen faces
/// `orientation`. Ordering is by `x`, then `y`, then orientation name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellState {
    x: u32,
    y: u32,
    orientation: Orientation,
}

impl CellState {
    /// Create a cell state
    pub const fn new(x: u32, y: u32, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    /// Tile column
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Tile row
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Facing of the screen this cell belongs to
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Tile rendered by this cell
    pub const fn tile(&self) -> TilePosition {
        TilePosition::new(self.x, self.y)
    }
}

impl Ord for CellState {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.x, self.y, self.orientation.name()).cmp(&(
            other.x,
            other.y,
            other.orientation.name(),
        ))
    }
}

impl PartialOrd for CellState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.x, self.y, self.orientation)
    }
}

impl FromStr for CellState {
    type Err = CinetileError;

    /// Parse the `{x}_{y}_{orientation}` form produced by `Display`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CinetileError::UnknownState {
            name: s.to_string(),
        };
        let mut parts = s.splitn(3, '_');
        let x = parts.next().and_then(|part| part.parse().ok()).ok_or_else(unknown)?;
        let y = parts.next().and_then(|part| part.parse().ok()).ok_or_else(unknown)?;
        let orientation = parts
            .next()
            .and_then(|part| part.parse().ok())
            .ok_or_else(unknown)?;
        Ok(Self::new(x, y, orientation))
    }
}
