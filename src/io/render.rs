//! Output-map composition from a generated grid
//!
//! The rendering collaborator for the core engine: turns a grid of tile
//! indices plus a sliced tileset into a PNG. Grid row 0 sits at the bottom
//! of the image.

use std::path::Path;

use image::{RgbaImage, imageops};

use crate::io::error::{AutoTileError, Result};
use crate::io::tileset::Tileset;
use crate::spatial::TileGrid;

/// Compose the generated grid into an RGBA image
///
/// # Errors
///
/// Returns `TileIndexOutOfRange` when the grid holds an index the tileset
/// cannot address
pub fn render_map(grid: &TileGrid, tileset: &Tileset) -> Result<RgbaImage> {
    let tile_width = tileset.tile_width();
    let tile_height = tileset.tile_height();
    let mut output = RgbaImage::new(
        grid.width() as u32 * tile_width,
        grid.height() as u32 * tile_height,
    );

    for (col, row, tile) in grid.iter_placed() {
        let view = tileset.tile_view(tile)?;
        let x = col as u32 * tile_width;
        // Grid rows ascend upward; image rows ascend downward
        let y = (grid.height() - 1 - row) as u32 * tile_height;
        imageops::replace(&mut output, &*view, i64::from(x), i64::from(y));
    }

    Ok(output)
}

/// Render the grid and save it as a PNG
///
/// # Errors
///
/// Returns `FileSystem` when the parent directory cannot be created and
/// `ImageExport` when saving fails, in addition to [`render_map`] errors
pub fn export_map(grid: &TileGrid, tileset: &Tileset, output_path: &Path) -> Result<()> {
    let output = render_map(grid, tileset)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| AutoTileError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }

    output
        .save(output_path)
        .map_err(|source| AutoTileError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })?;

    Ok(())
}
