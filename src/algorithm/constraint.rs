//! Per-cell match-mask construction and candidate tile selection

use std::fmt;

use rand::Rng;

use crate::algorithm::candidates::CandidateSet;
use crate::io::error::{AutoTileError, Result};
use crate::spatial::TileGrid;
use crate::terrain::{Corner, CornerCodes, TerrainCatalog, TerrainId, TileCodec};

/// Working constraint for one cell: a terrain id per corner, `None` = any
///
/// Built fresh per cell from the placed neighbors and discarded after
/// selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchMask {
    corners: [Option<TerrainId>; 4],
}

impl MatchMask {
    /// A mask that admits every tile
    pub const fn unconstrained() -> Self {
        Self { corners: [None; 4] }
    }

    /// Constraint on one corner, if any
    pub fn corner(&self, corner: Corner) -> Option<TerrainId> {
        self.corners.get(corner.index()).copied().flatten()
    }

    /// Pin one corner to a terrain; a later write supersedes an earlier one
    pub fn constrain(&mut self, corner: Corner, terrain: TerrainId) {
        if let Some(slot) = self.corners.get_mut(corner.index()) {
            *slot = Some(terrain);
        }
    }

    /// True when every constrained corner agrees with the given codes
    pub fn matches(&self, codes: &CornerCodes) -> bool {
        Corner::ALL.iter().all(|&corner| {
            self.corner(corner)
                .is_none_or(|terrain| codes.get(corner.index()).copied() == Some(terrain))
        })
    }
}

impl fmt::Display for MatchMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, slot) in self.corners.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match slot {
                Some(terrain) => write!(f, "{terrain}")?,
                None => write!(f, "*")?,
            }
        }
        write!(f, "]")
    }
}

/// Chooses tile indices consistent with a cell's already-placed neighbors
///
/// Holds only immutable lookup tables, so one engine may serve any number
/// of sequential generation runs.
#[derive(Debug, Clone)]
pub struct ConstraintEngine {
    catalog: TerrainCatalog,
    codec: TileCodec,
}

impl ConstraintEngine {
    /// Create an engine over the given terrain catalog
    pub fn new(catalog: TerrainCatalog) -> Self {
        let codec = TileCodec::new(&catalog);
        Self { catalog, codec }
    }

    /// The terrain catalog backing this engine
    pub const fn catalog(&self) -> &TerrainCatalog {
        &self.catalog
    }

    /// The tile codec backing this engine
    pub const fn codec(&self) -> &TileCodec {
        &self.codec
    }

    /// Build the match mask for `(col, row)` from its placed neighbors
    ///
    /// The left neighbor pins this cell's left corners, then the bottom
    /// neighbor pins the bottom corners. The bottom neighbor's bottom-left
    /// write is authoritative where both apply; the order of these steps is
    /// part of the algorithm's observable behavior.
    ///
    /// # Errors
    ///
    /// Returns `TileIndexOutOfRange` if a placed neighbor holds an index the
    /// codec cannot decode, which indicates a corrupted grid.
    pub fn build_mask(&self, grid: &TileGrid, col: i32, row: i32) -> Result<MatchMask> {
        let mut mask = MatchMask::unconstrained();

        self.constrain_from_neighbor(
            &mut mask,
            grid,
            col - 1,
            row,
            [
                (Corner::TopLeft, Corner::TopRight),
                (Corner::BottomLeft, Corner::BottomRight),
            ],
        )?;

        self.constrain_from_neighbor(
            &mut mask,
            grid,
            col,
            row - 1,
            [
                (Corner::BottomLeft, Corner::TopLeft),
                (Corner::BottomRight, Corner::TopRight),
            ],
        )?;

        self.relax_for_limited_terrain(&mut mask, grid, col + 1, row - 1)?;

        Ok(mask)
    }

    // Copies the facing corners of the neighbor at (col, row) into the mask;
    // absent neighbors (out of bounds or unplaced) constrain nothing.
    fn constrain_from_neighbor(
        &self,
        mask: &mut MatchMask,
        grid: &TileGrid,
        col: i32,
        row: i32,
        pairs: [(Corner, Corner); 2],
    ) -> Result<()> {
        let Some(tile) = grid.tile(col, row) else {
            return Ok(());
        };

        let codes = self.codec.corner_codes(tile)?;
        for (mask_corner, tile_corner) in pairs {
            if let Some(&terrain) = codes.get(tile_corner.index()) {
                mask.constrain(mask_corner, terrain);
            }
        }
        Ok(())
    }

    // One-step look-ahead repair for terrains without universal transitions.
    //
    // When the diagonal neighbor's top-right terrain differs from the mask's
    // top-left slot and that terrain cannot transition to every other
    // terrain, the top-right slot is forced to the terrain's lowest-id
    // partner so the outward corner stays satisfiable. A single diagonal
    // check, not a general solver.
    fn relax_for_limited_terrain(
        &self,
        mask: &mut MatchMask,
        grid: &TileGrid,
        col: i32,
        row: i32,
    ) -> Result<()> {
        let Some(tile) = grid.tile(col, row) else {
            return Ok(());
        };

        let codes = self.codec.corner_codes(tile)?;
        let Some(&terrain) = codes.get(Corner::TopRight.index()) else {
            return Ok(());
        };

        if mask.corner(Corner::TopLeft) == Some(terrain) {
            return Ok(());
        }

        let Some(terrain_type) = self.catalog.terrain(terrain) else {
            return Ok(());
        };

        if terrain_type.transitions().len() < self.catalog.max_transitions() {
            // A terrain with zero transitions has no partner to substitute
            if let Some(partner) = terrain_type.first_transition() {
                mask.constrain(Corner::TopRight, partner);
            }
        }

        Ok(())
    }

    /// Enumerate every tileset index whose corners agree with the mask
    ///
    /// # Errors
    ///
    /// Returns `TileIndexOutOfRange` only if the codec and tileset size
    /// disagree, which cannot happen for a catalog-derived codec.
    pub fn matching_tiles(&self, mask: &MatchMask) -> Result<CandidateSet> {
        let tile_count = self.codec.tile_count();
        let mut candidates = CandidateSet::new(tile_count);

        for tile in 0..tile_count {
            let codes = self.codec.corner_codes(tile)?;
            if mask.matches(&codes) {
                candidates.insert(tile);
            }
        }

        Ok(candidates)
    }

    /// Pick a tile index for `(col, row)` consistent with placed neighbors
    ///
    /// Selection is a one-shot uniform draw over the candidate list; no
    /// weighting by terrain frequency.
    ///
    /// # Errors
    ///
    /// Returns `NoMatchingTile` when the mask admits no tile. That signals a
    /// terrain/tileset configuration the relaxation rule could not repair and
    /// is fatal to the run; retrying with the same inputs cannot succeed.
    pub fn pick_tile<R: Rng>(
        &self,
        grid: &TileGrid,
        col: i32,
        row: i32,
        rng: &mut R,
    ) -> Result<usize> {
        let mask = self.build_mask(grid, col, row)?;
        let candidates = self.matching_tiles(&mask)?;

        let count = candidates.len();
        if count == 0 {
            return Err(AutoTileError::NoMatchingTile {
                col,
                row,
                mask: mask.to_string(),
            });
        }

        let choice = rng.random_range(0..count);
        candidates.nth(choice).ok_or(AutoTileError::NoMatchingTile {
            col,
            row,
            mask: mask.to_string(),
        })
    }
}
