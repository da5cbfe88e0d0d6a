//! Tile coordinate iteration over a show's grid
//!
//! Tiles are visited row by row: X advances first and wraps to the next Y.
//! Each iterator is finite and independent, so re-walking the grid means
//! creating a fresh one.

use std::fmt;
use std::iter::FusedIterator;

/// Position of one tile within a show's grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePosition {
    /// Column, counted from the left
    pub x: u32,
    /// Row, counted from the top
    pub y: u32,
}

impl TilePosition {
    /// Create a tile position
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for TilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.x, self.y)
    }
}

/// Lazy iterator over every tile position of a `width` x `height` grid
#[derive(Debug, Clone)]
pub struct TilePositions {
    width: u32,
    height: u32,
    next: Option<TilePosition>,
}

impl TilePositions {
    /// Iterate a grid of `width` columns and `height` rows
    ///
    /// A grid with a zero dimension yields nothing.
    pub const fn new(width: u32, height: u32) -> Self {
        let next = if width == 0 || height == 0 {
            None
        } else {
            Some(TilePosition::new(0, 0))
        };
        Self {
            width,
            height,
            next,
        }
    }

    /// Number of columns
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> u32 {
        self.height
    }

    fn remaining(&self) -> usize {
        self.next.map_or(0, |pos| {
            let total = u64::from(self.width) * u64::from(self.height);
            let consumed = u64::from(pos.y) * u64::from(self.width) + u64::from(pos.x);
            usize::try_from(total - consumed).unwrap_or(usize::MAX)
        })
    }
}

impl Iterator for TilePositions {
    type Item = TilePosition;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        let mut following = TilePosition::new(current.x + 1, current.y);
        if following.x == self.width {
            following = TilePosition::new(0, current.y + 1);
        }
        self.next = (following.y < self.height).then_some(following);

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TilePositions {}

impl FusedIterator for TilePositions {}
