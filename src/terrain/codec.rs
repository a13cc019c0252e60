//! Pure mapping from tile indices to per-corner terrain codes
//!
//! The low four bits of a tile index select, per corner, which of its row's
//! two terrains occupies that corner. The row is the index divided by the
//! fixed sixteen tiles per row.

use crate::io::configuration::TILES_PER_ROW;
use crate::io::error::{AutoTileError, Result};
use crate::terrain::catalog::{TerrainCatalog, TerrainId};

/// The four corners of a tile, in selector-bit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Selector bit 0 (value 1)
    TopLeft = 0,
    /// Selector bit 1 (value 2)
    TopRight = 1,
    /// Selector bit 2 (value 4)
    BottomLeft = 2,
    /// Selector bit 3 (value 8)
    BottomRight = 3,
}

impl Corner {
    /// All corners in selector-bit order
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Position of this corner within a corner-code array
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Selector-bit mask extracting this corner from a tile index
    pub const fn bit(self) -> usize {
        1 << (self as usize)
    }
}

/// Per-corner terrain ids for one tile, indexed by [`Corner::index`]
pub type CornerCodes = [TerrainId; 4];

/// Stateless decoder from tile indices to corner terrain codes
///
/// Holds only the catalog's per-row terrain pairs; cheap to clone and safe
/// to share across generation runs.
#[derive(Debug, Clone)]
pub struct TileCodec {
    rows: Vec<[TerrainId; 2]>,
}

impl TileCodec {
    /// Create a codec over the catalog's row table
    pub fn new(catalog: &TerrainCatalog) -> Self {
        Self {
            rows: catalog.row_pairs().to_vec(),
        }
    }

    /// Number of tile indices this codec can decode
    pub fn tile_count(&self) -> usize {
        self.rows.len() * TILES_PER_ROW
    }

    /// Decode a tile index into its four corner terrain ids
    ///
    /// Each selector bit picks the row's first terrain when clear and the
    /// second when set.
    ///
    /// # Errors
    ///
    /// Returns `TileIndexOutOfRange` when the index maps past the configured
    /// rows. Internally produced indices never do, so hitting this indicates
    /// an invariant violation rather than a recoverable condition.
    pub fn corner_codes(&self, tile: usize) -> Result<CornerCodes> {
        let row = self
            .rows
            .get(tile / TILES_PER_ROW)
            .ok_or(AutoTileError::TileIndexOutOfRange {
                index: tile,
                tile_count: self.tile_count(),
            })?;

        let [first, second] = *row;
        Ok(Corner::ALL.map(|corner| {
            if tile & corner.bit() == 0 {
                first
            } else {
                second
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TileCodec {
        let rows = vec![
            vec!["grass".to_string(), "water".to_string()],
            vec!["grass".to_string(), "sand".to_string()],
        ];
        TileCodec::new(&TerrainCatalog::from_rows(&rows).unwrap())
    }

    #[test]
    fn test_selector_bits_map_to_corners() {
        let codec = codec();

        // Tile 0b0110 in row 0: grass=0, water=1
        let codes = codec.corner_codes(6).unwrap();
        assert_eq!(codes, [0, 1, 1, 0]);

        // Same bit pattern in row 1 substitutes sand=2
        let codes = codec.corner_codes(16 + 6).unwrap();
        assert_eq!(codes, [0, 2, 2, 0]);
    }

    #[test]
    fn test_out_of_range_index_is_invariant_violation() {
        let err = codec().corner_codes(32).unwrap_err();
        assert!(matches!(
            err,
            AutoTileError::TileIndexOutOfRange {
                index: 32,
                tile_count: 32,
            }
        ));
    }
}
