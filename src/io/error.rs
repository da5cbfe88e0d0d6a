//! Error types for texture synthesis and show configuration

use std::fmt;
use std::path::PathBuf;

/// Main error type for all show processing operations
#[derive(Debug)]
pub enum CinetileError {
    /// Show configuration file is not well-formed JSON for the expected shape
    ConfigParse {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying parser error
        source: serde_json::Error,
    },

    /// Show configuration field failed validation
    ConfigValidation {
        /// Name of the invalid field
        field: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to write a JSON document
    Serialization {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying serializer error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to read a frame image from disk
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a texture image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Show input cannot produce any texture
    ///
    /// Occurs when the show has no decodable frames, or when scaling leaves
    /// less than one whole cell along the secondary axis.
    DegenerateInput {
        /// Show the input belongs to
        show: String,
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Orientation name outside the twelve known values
    UnknownOrientation {
        /// The name that failed to parse
        name: String,
    },

    /// Cell state name outside the closed state domain
    UnknownState {
        /// The name that failed to parse
        name: String,
    },

    /// Display identifier outside the fixed set of screens
    UnknownDisplay {
        /// The name that failed to parse
        name: String,
    },
}

impl CinetileError {
    /// Whether the error only rejects the show being processed
    ///
    /// Configuration and degenerate-input errors reject a single show and a
    /// batch run may continue with the next one. Everything else aborts the run.
    pub const fn is_show_local(&self) -> bool {
        matches!(
            self,
            Self::ConfigParse { .. }
                | Self::ConfigValidation { .. }
                | Self::DegenerateInput { .. }
                | Self::UnknownDisplay { .. }
        )
    }
}

impl fmt::Display for CinetileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse { path, source } => {
                write!(
                    f,
                    "Failed to parse show configuration '{}': {source}",
                    path.display()
                )
            }
            Self::ConfigValidation {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid show field '{field}' = '{value}': {reason}")
            }
            Self::Serialization { path, source } => {
                write!(f, "Failed to write JSON to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::DegenerateInput { show, reason } => {
                write!(f, "Show '{show}' cannot be tiled: {reason}")
            }
            Self::UnknownOrientation { name } => {
                write!(f, "Unknown orientation '{name}'")
            }
            Self::UnknownState { name } => {
                write!(f, "Unknown cell state '{name}'")
            }
            Self::UnknownDisplay { name } => {
                write!(f, "Unknown display '{name}'")
            }
        }
    }
}

impl std::error::Error for CinetileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigParse { source, .. } | Self::Serialization { source, .. } => Some(source),
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for show processing results
pub type Result<T> = std::result::Result<T, CinetileError>;

/// Create a configuration validation error
pub fn invalid_field(
    field: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CinetileError {
    CinetileError::ConfigValidation {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `operation` on `path`
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> CinetileError {
    let path = path.into();
    move |source| CinetileError::FileSystem {
        path,
        operation,
        source,
    }
}

/// Create a degenerate input error for `show`
pub fn degenerate_input(show: &impl ToString, reason: &impl ToString) -> CinetileError {
    CinetileError::DegenerateInput {
        show: show.to_string(),
        reason: reason.to_string(),
    }
}
