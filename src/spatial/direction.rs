//! Axis-aligned world directions and nearest-direction ranking
//!
//! The six directions are listed in a fixed canonical order. That order is
//! both the tie-break for look-vector ranking and the probe order used when
//! a newly placed screen cell inspects its neighbours.

use std::fmt;

/// One of the six axis-aligned directions in the host world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Negative Y
    Down,
    /// Positive Y
    Up,
    /// Negative Z
    North,
    /// Positive Z
    South,
    /// Negative X
    West,
    /// Positive X
    East,
}

impl Direction {
    /// All directions in canonical order
    pub const ALL: [Self; 6] = [
        Self::Down,
        Self::Up,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    /// The direction pointing the other way along the same axis
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Unit step in world coordinates `[x, y, z]`
    pub const fn offset(self) -> [i32; 3] {
        match self {
            Self::Down => [0, -1, 0],
            Self::Up => [0, 1, 0],
            Self::North => [0, 0, -1],
            Self::South => [0, 0, 1],
            Self::West => [-1, 0, 0],
            Self::East => [1, 0, 0],
        }
    }

    /// Whether this direction lies on the vertical axis
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Down | Self::Up)
    }

    /// Whether two directions lie on perpendicular axes
    pub const fn is_perpendicular_to(self, other: Self) -> bool {
        let a = self.offset();
        let b = other.offset();
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2] == 0
    }

    /// Lower-case name used in serialized forms
    pub const fn name(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        }
    }

    /// Rank all six directions by how closely they match a look vector
    ///
    /// Directions are ordered by descending dot product with `look`. Equal
    /// scores keep canonical order, so a zero vector ranks as [`Self::ALL`].
    pub fn ordered_by_nearest(look: [f64; 3]) -> [Self; 6] {
        let mut ranked = Self::ALL;
        ranked.sort_by(|a, b| b.alignment(look).total_cmp(&a.alignment(look)));
        ranked
    }

    fn alignment(self, look: [f64; 3]) -> f64 {
        let [x, y, z] = self.offset();
        let [look_x, look_y, look_z] = look;
        let score = f64::from(x) * look_x + f64::from(y) * look_y + f64::from(z) * look_z;
        // NaN components would otherwise sort ahead of every real score
        if score.is_nan() { 0.0 } else { score }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
