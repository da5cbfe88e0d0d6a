//! Fixed limits, file names and runtime configuration defaults

/// Pixels along one edge of a cell's texture
pub const PIXELS_PER_CELL: u32 = 16;

// Keeps the closed cell state domain small enough for hosts to declare up front
/// Maximum number of cells along the X axis of any show
pub const BLOCKS_X_MAX: u32 = 6;
/// Maximum number of cells along the Y axis of any show
pub const BLOCKS_Y_MAX: u32 = 6;

/// Animation frame time used when a show does not define one
pub const DEFAULT_FRAME_TIME: u32 = 25;

// Source layout
/// Name of the configuration file inside each show's source directory
pub const METADATA_FILENAME: &str = "meta.json";

// Output layout
/// Sub-directory of the assets root receiving textures
pub const TEXTURES_SUBDIR: [&str; 2] = ["textures", "block"];
/// Name of the show index written to the assets root
pub const SHOW_INDEX_FILENAME: &str = "shows.json";
/// Image format extension of generated textures
pub const TEXTURE_EXTENSION: &str = "png";
/// Extension appended to a texture file name for its timing metadata
pub const TIMING_METADATA_EXTENSION: &str = "mcmeta";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
