//! Frame scaling and secondary-axis measurement
//!
//! Scaling happens in two passes. [`ScalingContext`] scales every frame so the
//! defined axis spans a whole number of cells while folding the shortest
//! secondary-axis length seen so far. [`ScalingContext::finish`] then rounds
//! that minimum down to whole cells and yields the [`TileLayout`] that drives
//! cropping. Cropping cannot start before every frame has been measured
//! because only `finish` produces a layout.

use tracing::debug;

use crate::io::configuration::{BLOCKS_X_MAX, BLOCKS_Y_MAX, PIXELS_PER_CELL};
use crate::io::error::{Result, degenerate_input};
use crate::show::properties::ShowProperties;
use crate::spatial::tiles::{TilePosition, TilePositions};

/// Image axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis (width)
    X,
    /// Vertical axis (height)
    Y,
}

/// Round a pixel length down to a whole number of cells
///
/// Idempotent: an aligned length is returned unchanged.
pub const fn round_down_to_cell(length: u32) -> u32 {
    length - length % PIXELS_PER_CELL
}

/// First-pass state: scales frames and tracks the shortest secondary axis
#[derive(Debug, Clone)]
pub struct ScalingContext {
    show: String,
    primary: Axis,
    primary_cells: u32,
    secondary_limit: u32,
    min_secondary: Option<u32>,
}

impl ScalingContext {
    /// Start scaling frames for a show
    ///
    /// The defined axis is X when `blocks_x` is set and Y otherwise. When both
    /// bounds are set the Y bound caps the derived secondary cell count.
    pub fn new(props: &ShowProperties) -> Self {
        let (primary, primary_cells, secondary_bound, secondary_max) = if props.blocks_x() > 0 {
            (Axis::X, props.blocks_x(), props.blocks_y(), BLOCKS_Y_MAX)
        } else {
            (Axis::Y, props.blocks_y(), props.blocks_x(), BLOCKS_X_MAX)
        };
        let secondary_limit = if secondary_bound > 0 {
            secondary_bound
        } else {
            secondary_max
        };

        Self {
            show: props.display().to_string(),
            primary,
            primary_cells,
            secondary_limit,
            min_secondary: None,
        }
    }

    /// The axis whose cell count is fixed by configuration
    pub const fn primary_axis(&self) -> Axis {
        self.primary
    }

    /// Shortest scaled secondary-axis length measured so far
    pub const fn min_secondary(&self) -> Option<u32> {
        self.min_secondary
    }

    /// Target `(width, height)` for a source frame, recording its secondary length
    ///
    /// The defined axis becomes exactly `cells * PIXELS_PER_CELL` pixels and the
    /// other axis keeps the source aspect ratio, rounded down.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` if the source has a zero dimension or the
    /// scaled secondary axis would be empty.
    pub fn scale_for(&mut self, width: u32, height: u32) -> Result<(u32, u32)> {
        if width == 0 || height == 0 {
            return Err(degenerate_input(
                &self.show,
                &format!("frame has zero size {width}x{height}"),
            ));
        }

        let primary_length = self.primary_cells * PIXELS_PER_CELL;
        let (defined_source, other_source) = match self.primary {
            Axis::X => (width, height),
            Axis::Y => (height, width),
        };
        let secondary = u64::from(primary_length) * u64::from(other_source)
            / u64::from(defined_source);
        let secondary = u32::try_from(secondary).unwrap_or(u32::MAX);
        if secondary == 0 {
            return Err(degenerate_input(
                &self.show,
                &format!("frame {width}x{height} scales to an empty secondary axis"),
            ));
        }

        self.min_secondary = Some(self.min_secondary.map_or(secondary, |min| min.min(secondary)));

        Ok(match self.primary {
            Axis::X => (primary_length, secondary),
            Axis::Y => (secondary, primary_length),
        })
    }

    /// Close the measuring pass and fix the grid
    ///
    /// # Errors
    ///
    /// Returns `DegenerateInput` if no frame was measured or the shortest
    /// secondary axis is shorter than one cell.
    pub fn finish(self) -> Result<TileLayout> {
        let min_secondary = self
            .min_secondary
            .ok_or_else(|| degenerate_input(&self.show, &"no decodable frames"))?;

        let secondary_cells =
            (round_down_to_cell(min_secondary) / PIXELS_PER_CELL).min(self.secondary_limit);
        if secondary_cells == 0 {
            return Err(degenerate_input(
                &self.show,
                &format!("secondary axis of {min_secondary}px is shorter than one cell"),
            ));
        }

        let (blocks_x, blocks_y) = match self.primary {
            Axis::X => (self.primary_cells, secondary_cells),
            Axis::Y => (secondary_cells, self.primary_cells),
        };
        debug!(
            "{}: fixed grid at {blocks_x}x{blocks_y} cells (shortest secondary {min_secondary}px)",
            self.show
        );

        Ok(TileLayout {
            primary: self.primary,
            blocks_x,
            blocks_y,
            secondary_length: secondary_cells * PIXELS_PER_CELL,
        })
    }
}

/// Second-pass state: the fixed grid and how to crop frames onto it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    primary: Axis,
    blocks_x: u32,
    blocks_y: u32,
    secondary_length: u32,
}

impl TileLayout {
    /// Number of tile columns
    pub const fn blocks_x(&self) -> u32 {
        self.blocks_x
    }

    /// Number of tile rows
    pub const fn blocks_y(&self) -> u32 {
        self.blocks_y
    }

    /// Pixel length kept along the secondary axis
    pub const fn secondary_length(&self) -> u32 {
        self.secondary_length
    }

    /// Fresh iterator over every tile of the grid
    pub const fn positions(&self) -> TilePositions {
        TilePositions::new(self.blocks_x, self.blocks_y)
    }

    /// Offset that centres the kept region inside a scaled frame
    ///
    /// Zero along the defined axis, half the excess along the secondary axis.
    pub const fn crop_offset(&self, width: u32, height: u32) -> (u32, u32) {
        match self.primary {
            Axis::X => (0, height.saturating_sub(self.secondary_length) / 2),
            Axis::Y => (width.saturating_sub(self.secondary_length) / 2, 0),
        }
    }

    /// Top-left pixel of `position`'s tile within a scaled frame
    pub const fn tile_origin(&self, width: u32, height: u32, position: TilePosition) -> (u32, u32) {
        let (offset_x, offset_y) = self.crop_offset(width, height);
        (
            offset_x + position.x * PIXELS_PER_CELL,
            offset_y + position.y * PIXELS_PER_CELL,
        )
    }
}
