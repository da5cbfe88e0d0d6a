//! Compass-plus-tilt facing of an assembled screen
//!
//! An [`Orientation`] always has a compass heading and may additionally be
//! tilted to face up or down. The type only admits those two vertical values,
//! so the vertical part can never collide with the horizontal one and the
//! domain is closed at exactly twelve values.

use std::fmt;
use std::str::FromStr;

use crate::io::error::CinetileError;
use crate::spatial::direction::Direction;

/// Horizontal heading of an orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Compass {
    /// Facing negative Z
    North,
    /// Facing positive X
    East,
    /// Facing positive Z
    South,
    /// Facing negative X
    West,
}

impl Compass {
    /// All headings in declaration order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Heading rotated half a turn
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Heading rotated a quarter turn counter-clockwise when seen from above
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    /// The world direction this heading points along
    pub const fn direction(self) -> Direction {
        match self {
            Self::North => Direction::North,
            Self::East => Direction::East,
            Self::South => Direction::South,
            Self::West => Direction::West,
        }
    }

    /// The heading matching a horizontal world direction
    pub const fn from_direction(direction: Direction) -> Option<Self> {
        match direction {
            Direction::North => Some(Self::North),
            Direction::East => Some(Self::East),
            Direction::South => Some(Self::South),
            Direction::West => Some(Self::West),
            Direction::Up | Direction::Down => None,
        }
    }

    const fn rank(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

/// Vertical tilt of an orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tilt {
    /// Tilted to face downwards
    Down,
    /// Tilted to face upwards
    Up,
}

impl Tilt {
    /// Tilt in the other vertical direction
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }

    /// The world direction this tilt points along
    pub const fn direction(self) -> Direction {
        match self {
            Self::Down => Direction::Down,
            Self::Up => Direction::Up,
        }
    }

    /// The tilt matching a vertical world direction
    pub const fn from_direction(direction: Direction) -> Option<Self> {
        match direction {
            Direction::Down => Some(Self::Down),
            Direction::Up => Some(Self::Up),
            _ => None,
        }
    }
}

/// Facing of a screen: a compass heading and an optional tilt
///
/// Equality, hashing and ordering are structural on `(horizontal, vertical)`,
/// with an untilted orientation ordering before its tilted variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Orientation {
    horizontal: Compass,
    vertical: Option<Tilt>,
}

impl Orientation {
    /// Facing north
    pub const NORTH: Self = Self::new(Compass::North, None);
    /// Facing east
    pub const EAST: Self = Self::new(Compass::East, None);
    /// Facing south
    pub const SOUTH: Self = Self::new(Compass::South, None);
    /// Facing west
    pub const WEST: Self = Self::new(Compass::West, None);
    /// Facing north, tilted down
    pub const NORTH_DOWN: Self = Self::new(Compass::North, Some(Tilt::Down));
    /// Facing east, tilted down
    pub const EAST_DOWN: Self = Self::new(Compass::East, Some(Tilt::Down));
    /// Facing south, tilted down
    pub const SOUTH_DOWN: Self = Self::new(Compass::South, Some(Tilt::Down));
    /// Facing west, tilted down
    pub const WEST_DOWN: Self = Self::new(Compass::West, Some(Tilt::Down));
    /// Facing north, tilted up
    pub const NORTH_UP: Self = Self::new(Compass::North, Some(Tilt::Up));
    /// Facing east, tilted up
    pub const EAST_UP: Self = Self::new(Compass::East, Some(Tilt::Up));
    /// Facing south, tilted up
    pub const SOUTH_UP: Self = Self::new(Compass::South, Some(Tilt::Up));
    /// Facing west, tilted up
    pub const WEST_UP: Self = Self::new(Compass::West, Some(Tilt::Up));

    /// Every valid orientation, indexed by [`Self::index`]
    pub const ALL: [Self; 12] = [
        Self::NORTH,
        Self::EAST,
        Self::SOUTH,
        Self::WEST,
        Self::NORTH_DOWN,
        Self::EAST_DOWN,
        Self::SOUTH_DOWN,
        Self::WEST_DOWN,
        Self::NORTH_UP,
        Self::EAST_UP,
        Self::SOUTH_UP,
        Self::WEST_UP,
    ];

    /// Create an orientation from an explicit heading and tilt
    pub const fn new(horizontal: Compass, vertical: Option<Tilt>) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// The compass heading
    pub const fn horizontal(self) -> Compass {
        self.horizontal
    }

    /// The tilt, if any
    pub const fn vertical(self) -> Option<Tilt> {
        self.vertical
    }

    /// The orientation facing the other way
    ///
    /// Reverses the heading and the tilt. Applying it twice is the identity.
    pub const fn opposite(self) -> Self {
        let vertical = match self.vertical {
            Some(tilt) => Some(tilt.opposite()),
            None => None,
        };
        Self::new(self.horizontal.opposite(), vertical)
    }

    /// Position of this orientation within [`Self::ALL`]
    pub const fn index(self) -> usize {
        let tilt_rank = match self.vertical {
            None => 0,
            Some(Tilt::Down) => 1,
            Some(Tilt::Up) => 2,
        };
        tilt_rank * 4 + self.horizontal.rank()
    }

    /// Derive the orientation of an agent from a nearest-direction ranking
    ///
    /// When the best-ranked direction is vertical it becomes the tilt and the
    /// best-ranked horizontal direction after it becomes the heading. Otherwise
    /// the best-ranked direction is the heading and there is no tilt. A ranking
    /// without any horizontal entry falls back to north.
    pub fn from_agent_ranking(ranking: &[Direction]) -> Self {
        let vertical = ranking.first().copied().and_then(Tilt::from_direction);
        let horizontal = ranking
            .iter()
            .copied()
            .find_map(Compass::from_direction)
            .unwrap_or(Compass::North);
        Self::new(horizontal, vertical)
    }

    /// Derive the orientation of an agent looking along `look`
    pub fn from_look_vector(look: [f64; 3]) -> Self {
        Self::from_agent_ranking(&Direction::ordered_by_nearest(look))
    }

    /// Lower-case serialized name, e.g. `north` or `east_up`
    pub const fn name(self) -> &'static str {
        match (self.horizontal, self.vertical) {
            (Compass::North, None) => "north",
            (Compass::East, None) => "east",
            (Compass::South, None) => "south",
            (Compass::West, None) => "west",
            (Compass::North, Some(Tilt::Down)) => "north_down",
            (Compass::East, Some(Tilt::Down)) => "east_down",
            (Compass::South, Some(Tilt::Down)) => "south_down",
            (Compass::West, Some(Tilt::Down)) => "west_down",
            (Compass::North, Some(Tilt::Up)) => "north_up",
            (Compass::East, Some(Tilt::Up)) => "east_up",
            (Compass::South, Some(Tilt::Up)) => "south_up",
            (Compass::West, Some(Tilt::Up)) => "west_up",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = CinetileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|orientation| orientation.name() == s)
            .ok_or_else(|| CinetileError::UnknownOrientation {
                name: s.to_string(),
            })
    }
}
