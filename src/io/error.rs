//! Error types for configuration loading and map generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all autotiling operations
#[derive(Debug)]
pub enum AutoTileError {
    /// Terrain-definition or tileset-layout input violates a structural invariant
    ///
    /// Raised during initialization, before any grid work begins
    InvalidConfig {
        /// Description of the violated invariant
        reason: String,
    },

    /// Configuration file is not valid JSON
    ConfigParse {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// The constraint search for a cell yielded zero candidate tiles
    ///
    /// Signals an inconsistent terrain/tileset configuration that the
    /// relaxation rule failed to repair. Fatal: no partial grid is returned.
    NoMatchingTile {
        /// Map column of the failed cell
        col: i32,
        /// Map row of the failed cell
        row: i32,
        /// The match mask that admitted no tile
        mask: String,
    },

    /// Tile index maps past the configured tileset rows
    ///
    /// Indicates a programming defect rather than a data problem; internally
    /// produced indices never leave the configured range.
    TileIndexOutOfRange {
        /// The offending tile index
        index: usize,
        /// Number of tiles the configuration defines
        tile_count: usize,
    },

    /// Failed to load the tileset texture from the filesystem
    ImageLoad {
        /// Path to the texture file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the rendered map to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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
}

impl fmt::Display for AutoTileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => {
                write!(f, "Invalid configuration: {reason}")
            }
            Self::ConfigParse { path, source } => {
                write!(
                    f,
                    "Failed to parse configuration '{}': {source}",
                    path.display()
                )
            }
            Self::NoMatchingTile { col, row, mask } => {
                write!(
                    f,
                    "No tile matches mask {mask} at cell ({col}, {row}); \
                     the tileset lacks a required transition tile"
                )
            }
            Self::TileIndexOutOfRange { index, tile_count } => {
                write!(
                    f,
                    "Tile index {index} is out of range for a {tile_count}-tile tileset"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load texture '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export map to '{}': {source}", path.display())
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
        }
    }
}

impl std::error::Error for AutoTileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for autotiling results
pub type Result<T> = std::result::Result<T, AutoTileError>;
