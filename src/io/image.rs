//! Frame loading and texture export

use image::{DynamicImage, ImageError, ImageReader, ImageResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::io::configuration::{
    METADATA_FILENAME, SHOW_INDEX_FILENAME, TEXTURE_EXTENSION, TEXTURES_SUBDIR,
    TIMING_METADATA_EXTENSION,
};
use crate::io::error::{CinetileError, Result, file_system};
use crate::show::display::DisplayId;
use crate::texture::synthesis::AnimatedTexture;

/// Frame files of a show directory, sorted by file name
///
/// Every regular file except the show's `meta.json` counts as a frame.
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be listed.
pub fn frame_paths(show_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(show_dir).map_err(file_system(show_dir, "read show directory"))? {
        let entry = entry.map_err(file_system(show_dir, "read show directory"))?;
        let path = entry.path();
        if path.is_file() && entry.file_name() != METADATA_FILENAME {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Decode every frame of a show directory in file name order
///
/// The format is recognised from file content, not the extension. Files that
/// are not decodable images are skipped.
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be listed and `ImageLoad` if a
/// frame file cannot be read.
pub fn load_frames(show_dir: &Path) -> Result<Vec<DynamicImage>> {
    let mut frames = Vec::new();
    for path in frame_paths(show_dir)? {
        match decode_frame(&path) {
            Ok(frame) => frames.push(frame),
            Err(ImageError::IoError(source)) => {
                return Err(CinetileError::ImageLoad {
                    path,
                    source: ImageError::IoError(source),
                });
            }
            Err(e) => debug!("Skipping {}: {e}", path.display()),
        }
    }
    Ok(frames)
}

fn decode_frame(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Directory of an assets root receiving texture files
pub fn textures_dir(assets_dir: &Path) -> PathBuf {
    TEXTURES_SUBDIR
        .iter()
        .fold(assets_dir.to_path_buf(), |dir, part| dir.join(part))
}

/// Path of the adjusted configuration written for `display`
pub fn properties_path(assets_dir: &Path, display: DisplayId) -> PathBuf {
    assets_dir.join(format!("{display}.json"))
}

/// Write a texture strip and its timing metadata into `textures_dir`
///
/// Produces `<name>.png` and `<name>.png.mcmeta`.
///
/// # Errors
///
/// Returns `ImageExport` if the image cannot be written, `Serialization` or
/// `FileSystem` if the metadata cannot be written.
pub fn export_texture(texture: &AnimatedTexture, textures_dir: &Path) -> Result<()> {
    let image_path = textures_dir.join(format!("{}.{TEXTURE_EXTENSION}", texture.name));
    texture
        .image
        .save(&image_path)
        .map_err(|source| CinetileError::ImageExport {
            path: image_path.clone(),
            source,
        })?;

    let mut metadata_path = image_path.into_os_string();
    metadata_path.push(format!(".{TIMING_METADATA_EXTENSION}"));
    let metadata_path = PathBuf::from(metadata_path);
    let json = serde_json::to_string(&texture.metadata).map_err(|source| {
        CinetileError::Serialization {
            path: metadata_path.clone(),
            source,
        }
    })?;
    fs::write(&metadata_path, json).map_err(file_system(&metadata_path, "write timing metadata"))
}

/// Write the index of generated shows to the assets root
///
/// # Errors
///
/// Returns `Serialization` or `FileSystem` if the index cannot be written.
pub fn write_show_index(assets_dir: &Path, displays: &[DisplayId]) -> Result<()> {
    let path = assets_dir.join(SHOW_INDEX_FILENAME);
    let json =
        serde_json::to_string_pretty(displays).map_err(|source| CinetileError::Serialization {
            path: path.clone(),
            source,
        })?;
    fs::create_dir_all(assets_dir).map_err(file_system(assets_dir, "create directory"))?;
    fs::write(&path, json).map_err(file_system(&path, "write show index"))
}
