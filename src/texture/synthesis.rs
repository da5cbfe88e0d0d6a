//! Animated tile texture synthesis
//!
//! Every tile of a show becomes one texture strip a single cell wide and one
//! cell tall per frame. Frames are stacked bottom-up: the first frame sits at
//! the bottom of the strip and the last frame at the top.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use tracing::info;

use crate::io::configuration::PIXELS_PER_CELL;
use crate::io::error::Result;
use crate::show::display::DisplayId;
use crate::show::properties::{AnimationMetadata, ShowProperties};
use crate::spatial::tiles::TilePosition;
use crate::texture::scaling::{ScalingContext, TileLayout};

/// One tile's animated texture and its timing
#[derive(Debug, Clone)]
pub struct AnimatedTexture {
    /// Resource name, `{display}_{x}_{y}`
    pub name: String,
    /// Tile the texture belongs to
    pub position: TilePosition,
    /// Frame strip, `PIXELS_PER_CELL` wide and `PIXELS_PER_CELL * frames` tall
    pub image: RgbImage,
    /// Frame timing
    pub metadata: AnimationMetadata,
}

/// Result of synthesizing one show
#[derive(Debug, Clone)]
pub struct SynthesizedShow {
    /// Show properties with both grid bounds fixed
    pub properties: ShowProperties,
    /// One texture per tile, in tile iteration order
    pub textures: Vec<AnimatedTexture>,
}

/// Resource name of a tile texture
pub fn texture_name(display: DisplayId, position: TilePosition) -> String {
    format!("{display}_{}_{}", position.x, position.y)
}

/// Scale every frame and fix the tile layout
///
/// # Errors
///
/// Returns `DegenerateInput` if there are no frames, a frame has a zero
/// dimension, or the frames leave less than one cell along the secondary axis.
pub fn scale_frames(
    props: &ShowProperties,
    frames: &[DynamicImage],
) -> Result<(Vec<RgbImage>, TileLayout)> {
    let mut context = ScalingContext::new(props);

    let scaled = frames
        .iter()
        .map(|frame| {
            let (width, height) = context.scale_for(frame.width(), frame.height())?;
            Ok(imageops::resize(
                &frame.to_rgb8(),
                width,
                height,
                FilterType::Nearest,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let layout = context.finish()?;
    Ok((scaled, layout))
}

/// Build the frame strip for one tile from already scaled frames
pub fn build_texture(layout: &TileLayout, frames: &[RgbImage], position: TilePosition) -> RgbImage {
    let frame_count = u32::try_from(frames.len()).unwrap_or(u32::MAX);
    let mut strip = RgbImage::new(PIXELS_PER_CELL, PIXELS_PER_CELL * frame_count);

    for (row_from_top, frame) in (0..frame_count).rev().zip(frames) {
        let (x, y) = layout.tile_origin(frame.width(), frame.height(), position);
        let tile = imageops::crop_imm(frame, x, y, PIXELS_PER_CELL, PIXELS_PER_CELL).to_image();
        imageops::replace(
            &mut strip,
            &tile,
            0,
            i64::from(row_from_top * PIXELS_PER_CELL),
        );
    }

    strip
}

/// Turn a show's ordered frames into one animated texture per tile
///
/// # Errors
///
/// Returns `DegenerateInput` under the same conditions as [`scale_frames`].
pub fn synthesize(props: &ShowProperties, frames: &[DynamicImage]) -> Result<SynthesizedShow> {
    let (scaled, layout) = scale_frames(props, frames)?;
    let properties = props.with_grid(layout.blocks_x(), layout.blocks_y());
    let metadata = properties.animation_metadata();

    let textures: Vec<AnimatedTexture> = layout
        .positions()
        .map(|position| AnimatedTexture {
            name: texture_name(properties.display(), position),
            position,
            image: build_texture(&layout, &scaled, position),
            metadata,
        })
        .collect();

    info!(
        "{}: {} frames -> {} tiles ({}x{})",
        properties.display(),
        scaled.len(),
        textures.len(),
        properties.blocks_x(),
        properties.blocks_y()
    );

    Ok(SynthesizedShow {
        properties,
        textures,
    })
}
