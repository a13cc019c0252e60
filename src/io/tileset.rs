//! Tileset image loading and slicing into addressable tile cells
//!
//! The core algorithm consumes the tileset only as a tile count; the pixel
//! views exist for the rendering side.

use std::path::Path;

use image::{RgbaImage, SubImage, imageops};

use crate::io::configuration::{TILES_PER_ROW, TilesetConfig};
use crate::io::error::{AutoTileError, Result};
use crate::terrain::TerrainCatalog;

/// A tileset texture sliced into a `rows x 16` grid of tile cells
#[derive(Debug, Clone)]
pub struct Tileset {
    atlas: RgbaImage,
    tile_width: u32,
    tile_height: u32,
    columns: u32,
    rows: u32,
}

impl Tileset {
    /// Load the tileset texture and slice it against the catalog's rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the configuration itself is structurally
    /// invalid, when the texture path is missing or a directory, when the
    /// image does not divide evenly into tiles, or when the sliced geometry
    /// does not match the terrain definitions; `ImageLoad` when decoding fails
    pub fn load(path: &Path, config: &TilesetConfig, catalog: &TerrainCatalog) -> Result<Self> {
        // Hand-constructed configs bypass from_path, so the zero-dimension
        // guard has to run again before any division
        config.validate()?;

        if !path.is_file() {
            return Err(AutoTileError::InvalidConfig {
                reason: format!(
                    "tileset texture '{}' does not exist or is not a regular file",
                    path.display()
                ),
            });
        }

        let atlas = image::open(path)
            .map_err(|source| AutoTileError::ImageLoad {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let (width, height) = atlas.dimensions();
        if width % config.tile_width != 0 || height % config.tile_height != 0 {
            return Err(AutoTileError::InvalidConfig {
                reason: format!(
                    "texture dimensions {width}x{height} do not divide into \
                     {}x{} tiles",
                    config.tile_width, config.tile_height
                ),
            });
        }

        let columns = width / config.tile_width;
        let rows = height / config.tile_height;

        if rows as usize != catalog.row_count() {
            return Err(AutoTileError::InvalidConfig {
                reason: format!(
                    "tileset has {rows} rows but terrain_defs declares {}",
                    catalog.row_count()
                ),
            });
        }

        if columns as usize != TILES_PER_ROW {
            return Err(AutoTileError::InvalidConfig {
                reason: format!(
                    "each tileset row must have exactly {TILES_PER_ROW} tiles, found {columns}"
                ),
            });
        }

        Ok(Self {
            atlas,
            tile_width: config.tile_width,
            tile_height: config.tile_height,
            columns,
            rows,
        })
    }

    /// Number of addressable tile cells
    pub const fn tile_count(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Tile width in pixels
    pub const fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Tile height in pixels
    pub const fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Pixel view of one tile cell
    ///
    /// Cells are numbered row-major from the top-left of the atlas, matching
    /// the tile-index encoding.
    ///
    /// # Errors
    ///
    /// Returns `TileIndexOutOfRange` for indices past the sliced grid
    pub fn tile_view(&self, index: usize) -> Result<SubImage<&RgbaImage>> {
        if index >= self.tile_count() {
            return Err(AutoTileError::TileIndexOutOfRange {
                index,
                tile_count: self.tile_count(),
            });
        }

        let col = index as u32 % self.columns;
        let row = index as u32 / self.columns;
        Ok(imageops::crop_imm(
            &self.atlas,
            col * self.tile_width,
            row * self.tile_height,
            self.tile_width,
            self.tile_height,
        ))
    }
}
