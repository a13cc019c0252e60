//! Tileset configuration format, validation, and crate constants

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::io::error::{AutoTileError, Result};

/// Terrain names per definition row: each tileset row transitions between two
pub const TERRAINS_PER_ROW: usize = 2;

/// Tiles per tileset row: two full-terrain tiles plus fourteen transitions,
/// one per 4-bit corner-selector combination
pub const TILES_PER_ROW: usize = 16;

/// Smallest accepted tile edge in pixels
pub const MIN_TILE_DIMENSION: u32 = 1;
/// Largest accepted tile edge in pixels
pub const MAX_TILE_DIMENSION: u32 = 128;

/// Default map width in tiles
pub const DEFAULT_MAP_WIDTH: usize = 16;
/// Default map height in tiles
pub const DEFAULT_MAP_HEIGHT: usize = 12;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Suffix added to default output filenames
pub const OUTPUT_SUFFIX: &str = "_map";

/// Parsed tileset configuration file
///
/// The texture path is interpreted relative to the configuration file's
/// directory unless absolute.
#[derive(Debug, Clone, Deserialize)]
pub struct TilesetConfig {
    /// Path to the tileset texture image
    pub texture: PathBuf,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    /// Ordered rows of terrain-name pairs, one per tileset row
    pub terrain_defs: Vec<Vec<String>>,
}

impl TilesetConfig {
    /// Load and validate a configuration file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` when the file cannot be read, `ConfigParse` for
    /// malformed JSON, and `InvalidConfig` for out-of-range tile dimensions
    /// or an empty terrain-definition list
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| AutoTileError::FileSystem {
            path: path.to_path_buf(),
            operation: "read configuration",
            source,
        })?;

        let config: Self =
            serde_json::from_str(&data).map_err(|source| AutoTileError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    // Structural checks that need no filesystem access; texture existence is
    // checked at tileset load time against the resolved path.
    pub(crate) fn validate(&self) -> Result<()> {
        let dimension_range = MIN_TILE_DIMENSION..=MAX_TILE_DIMENSION;

        if !dimension_range.contains(&self.tile_width) {
            return Err(AutoTileError::InvalidConfig {
                reason: format!(
                    "tile_width {} is outside {MIN_TILE_DIMENSION}..={MAX_TILE_DIMENSION}",
                    self.tile_width
                ),
            });
        }

        if !dimension_range.contains(&self.tile_height) {
            return Err(AutoTileError::InvalidConfig {
                reason: format!(
                    "tile_height {} is outside {MIN_TILE_DIMENSION}..={MAX_TILE_DIMENSION}",
                    self.tile_height
                ),
            });
        }

        if self.terrain_defs.is_empty() {
            return Err(AutoTileError::InvalidConfig {
                reason: "terrain_defs must contain at least one row".to_string(),
            });
        }

        Ok(())
    }

    /// Texture path resolved against the configuration file's directory
    pub fn resolve_texture(&self, config_path: &Path) -> PathBuf {
        if self.texture.is_absolute() {
            return self.texture.clone();
        }
        config_path
            .parent()
            .map_or_else(|| self.texture.clone(), |dir| dir.join(&self.texture))
    }
}
