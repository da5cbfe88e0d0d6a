//! Screen extension table
//!
//! For each orientation there are exactly two directions in which a screen
//! may legally grow: the direction in which the tile X coordinate increases
//! and the direction in which the structure is built upwards (which lowers
//! the tile Y coordinate, since tile rows are numbered from the top).

use crate::spatial::direction::Direction;
use crate::spatial::orientation::{Compass, Orientation, Tilt};

/// Tile axis advanced by growing in a given direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrowthAxis {
    /// Growth along the tile X axis (x + 1)
    X,
    /// Growth along the tile Y axis (y - 1)
    Y,
}

/// The two legal growth directions for one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthDirections {
    /// Direction in which tile X increases
    pub x: Direction,
    /// Direction in which the screen is built up
    pub y: Direction,
}

impl GrowthDirections {
    /// Which growth axis `direction` corresponds to, if either
    pub fn axis_of(&self, direction: Direction) -> Option<GrowthAxis> {
        if direction == self.x {
            Some(GrowthAxis::X)
        } else if direction == self.y {
            Some(GrowthAxis::Y)
        } else {
            None
        }
    }
}

/// Look up the growth directions of an orientation
///
/// Literal table; [`derive_growth_directions`] computes the same values from
/// the orientation's axes.
pub const fn growth_directions(orientation: Orientation) -> GrowthDirections {
    use Direction::{East, North, South, Up, West};

    let (x, y) = match (orientation.horizontal(), orientation.vertical()) {
        (Compass::North, None) => (West, Up),
        (Compass::East, None) => (North, Up),
        (Compass::South, None) => (East, Up),
        (Compass::West, None) => (South, Up),
        (Compass::North, Some(Tilt::Down)) => (West, North),
        (Compass::East, Some(Tilt::Down)) => (North, East),
        (Compass::South, Some(Tilt::Down)) => (East, South),
        (Compass::West, Some(Tilt::Down)) => (South, West),
        (Compass::North, Some(Tilt::Up)) => (West, South),
        (Compass::East, Some(Tilt::Up)) => (North, West),
        (Compass::South, Some(Tilt::Up)) => (East, North),
        (Compass::West, Some(Tilt::Up)) => (South, East),
    };
    GrowthDirections { x, y }
}

/// Compute the growth directions from the orientation's own axes
///
/// X is the heading turned a quarter counter-clockwise. Y is straight up,
/// tipped forward onto the heading when tilted down and backwards away from
/// it when tilted up.
pub const fn derive_growth_directions(orientation: Orientation) -> GrowthDirections {
    let heading = orientation.horizontal();
    let x = heading.counter_clockwise().direction();
    let y = match orientation.vertical() {
        None => Direction::Up,
        Some(Tilt::Down) => heading.direction(),
        Some(Tilt::Up) => heading.opposite().direction(),
    };
    GrowthDirections { x, y }
}

/// The complete table, one entry per orientation in [`Orientation::ALL`] order
pub fn extension_table() -> [(Orientation, GrowthDirections); 12] {
    Orientation::ALL.map(|orientation| (orientation, growth_directions(orientation)))
}
