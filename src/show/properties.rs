//! Validated show configuration
//!
//! A show's `meta.json` is read into a loosely typed record first so that
//! every field can be checked and reported by name, then converted into an
//! immutable [`ShowProperties`]. The same JSON shape is written back once the
//! texture pipeline has fixed the secondary axis.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::io::configuration::{BLOCKS_X_MAX, BLOCKS_Y_MAX, DEFAULT_FRAME_TIME};
use crate::io::error::{CinetileError, Result, file_system, invalid_field};
use crate::show::display::DisplayId;

/// Timing metadata stored next to each animated texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationMetadata {
    /// Animation settings
    pub animation: FrameTiming,
}

/// Frame timing of an animated texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameTiming {
    /// Duration of each frame in host ticks
    pub frametime: u32,
}

/// Validated configuration of one show
///
/// `blocks_x` and `blocks_y` are the grid bounds along X and Y. Before the
/// texture pipeline runs one of them may be zero, meaning it is derived from
/// the frames' aspect ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowProperties {
    show_name: String,
    frame_time: u32,
    blocks_x: u32,
    blocks_y: u32,
    assign_to_block: DisplayId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawShowProperties {
    show_name: Option<String>,
    frame_time: Option<i64>,
    blocks_x: Option<i64>,
    blocks_y: Option<i64>,
    assign_to_block: Option<String>,
}

impl ShowProperties {
    /// Create and validate show properties
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidation` if either bound exceeds its per-axis maximum
    /// or if both bounds are zero.
    pub fn new(
        assign_to_block: DisplayId,
        show_name: impl Into<String>,
        frame_time: u32,
        blocks_x: u32,
        blocks_y: u32,
    ) -> Result<Self> {
        let blocks_x = check_bound("blocksX", i64::from(blocks_x), BLOCKS_X_MAX)?;
        let blocks_y = check_bound("blocksY", i64::from(blocks_y), BLOCKS_Y_MAX)?;
        if blocks_x == 0 && blocks_y == 0 {
            return Err(invalid_field(
                "blocksX",
                &0,
                &"either blocksX or blocksY must be defined",
            ));
        }

        Ok(Self {
            show_name: show_name.into(),
            frame_time,
            blocks_x,
            blocks_y,
            assign_to_block,
        })
    }

    /// Parse and validate show properties from JSON text
    ///
    /// `origin` is only used to label parse errors.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed JSON and `ConfigValidation` for
    /// missing or out-of-range fields.
    pub fn from_json(json: &str, origin: &Path) -> Result<Self> {
        let raw: RawShowProperties =
            serde_json::from_str(json).map_err(|source| CinetileError::ConfigParse {
                path: origin.to_path_buf(),
                source,
            })?;
        Self::try_from(raw)
    }

    /// Read and validate show properties from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read, otherwise as
    /// [`Self::from_json`].
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(file_system(path, "read configuration"))?;
        Self::from_json(&json, path)
    }

    /// Write the properties as JSON to `path`
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` or `Serialization` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|source| CinetileError::Serialization {
                path: path.to_path_buf(),
                source,
            })?;
        fs::write(path, json).map_err(file_system(path, "write configuration"))
    }

    /// Display name of the show
    pub fn show_name(&self) -> &str {
        &self.show_name
    }

    /// Frame time in host ticks
    pub const fn frame_time(&self) -> u32 {
        self.frame_time
    }

    /// Grid bound along X (0 when still to be derived)
    pub const fn blocks_x(&self) -> u32 {
        self.blocks_x
    }

    /// Grid bound along Y (0 when still to be derived)
    pub const fn blocks_y(&self) -> u32 {
        self.blocks_y
    }

    /// Screen the show is assigned to
    pub const fn display(&self) -> DisplayId {
        self.assign_to_block
    }

    /// Timing metadata for every texture of this show
    pub const fn animation_metadata(&self) -> AnimationMetadata {
        AnimationMetadata {
            animation: FrameTiming {
                frametime: self.frame_time,
            },
        }
    }

    /// Copy of these properties with both grid bounds fixed
    ///
    /// Bounds are clamped to the per-axis maximum.
    pub fn with_grid(&self, blocks_x: u32, blocks_y: u32) -> Self {
        Self {
            blocks_x: blocks_x.min(BLOCKS_X_MAX),
            blocks_y: blocks_y.min(BLOCKS_Y_MAX),
            ..self.clone()
        }
    }
}

impl TryFrom<RawShowProperties> for ShowProperties {
    type Error = CinetileError;

    fn try_from(raw: RawShowProperties) -> Result<Self> {
        let display_name = raw
            .assign_to_block
            .ok_or_else(|| invalid_field("assignToBlock", &"", &"assignToBlock is not defined"))?;
        let display_id: DisplayId = display_name.parse().map_err(|_unknown: CinetileError| {
            invalid_field(
                "assignToBlock",
                &display_name,
                &"not one of screen_alpha .. screen_zulu",
            )
        })?;

        let frame_time = match raw.frame_time {
            None | Some(0) => {
                warn!(
                    "`frameTime` not defined for {display_id} - setting to {DEFAULT_FRAME_TIME}"
                );
                DEFAULT_FRAME_TIME
            }
            Some(value) => u32::try_from(value).map_err(|_overflow| {
                invalid_field("frameTime", &value, &"should be greater than zero")
            })?,
        };

        let blocks_x = check_bound("blocksX", raw.blocks_x.unwrap_or(0), BLOCKS_X_MAX)?;
        let blocks_y = check_bound("blocksY", raw.blocks_y.unwrap_or(0), BLOCKS_Y_MAX)?;
        let show_name = raw.show_name.unwrap_or_else(|| display_id.readable_name());

        Self::new(display_id, show_name, frame_time, blocks_x, blocks_y)
    }
}

fn check_bound(field: &'static str, value: i64, max: u32) -> Result<u32> {
    if value < 0 {
        return Err(invalid_field(field, &value, &"should not be negative"));
    }
    match u32::try_from(value) {
        Ok(bound) if bound <= max => Ok(bound),
        _ => Err(invalid_field(field, &value, &format!("cannot exceed {max}"))),
    }
}
