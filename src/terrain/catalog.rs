//! Terrain-type bookkeeping and transition tables built from terrain definitions

use std::collections::BTreeSet;

use crate::io::configuration::{TERRAINS_PER_ROW, TILES_PER_ROW};
use crate::io::error::{AutoTileError, Result};

/// Identifier assigned to a distinct terrain name, in order of first appearance
pub type TerrainId = u8;

/// A named ground-cover category and the terrains it may directly border
#[derive(Debug, Clone)]
pub struct TerrainType {
    id: TerrainId,
    name: String,
    transitions: BTreeSet<TerrainId>,
}

impl TerrainType {
    fn new(id: TerrainId, name: String) -> Self {
        Self {
            id,
            name,
            transitions: BTreeSet::new(),
        }
    }

    /// Identifier of this terrain type
    pub const fn id(&self) -> TerrainId {
        self.id
    }

    /// Name this terrain was declared under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Terrain ids this terrain may directly border, in ascending order
    pub const fn transitions(&self) -> &BTreeSet<TerrainId> {
        &self.transitions
    }

    /// Lowest-id transition partner, if any transitions exist
    pub fn first_transition(&self) -> Option<TerrainId> {
        self.transitions.iter().next().copied()
    }
}

/// Lookup tables derived from the ordered terrain-definition rows
///
/// Each definition row names the two terrains one tileset row transitions
/// between. Ids are assigned monotonically on first appearance; repeated
/// names resolve to their existing id. Every row registers a mutual
/// transition between its two terrains. Built once at load time and
/// immutable afterward.
#[derive(Debug, Clone)]
pub struct TerrainCatalog {
    types: Vec<TerrainType>,
    row_pairs: Vec<[TerrainId; 2]>,
}

impl TerrainCatalog {
    /// Build the catalog from ordered rows of terrain-name pairs
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when a row does not contain exactly two
    /// terrain names
    pub fn from_rows(rows: &[Vec<String>]) -> Result<Self> {
        let mut types: Vec<TerrainType> = Vec::new();
        let mut row_pairs = Vec::with_capacity(rows.len());

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != TERRAINS_PER_ROW {
                return Err(AutoTileError::InvalidConfig {
                    reason: format!(
                        "terrain_defs row {row_index} must contain exactly \
                         {TERRAINS_PER_ROW} terrain names, found {}",
                        row.len()
                    ),
                });
            }

            let mut pair = [0; TERRAINS_PER_ROW];
            for (slot, name) in pair.iter_mut().zip(row) {
                *slot = Self::intern(&mut types, name);
            }

            // The row's two terrains transition into each other
            let [first, second] = pair;
            if let Some(terrain) = types.get_mut(first as usize) {
                terrain.transitions.insert(second);
            }
            if let Some(terrain) = types.get_mut(second as usize) {
                terrain.transitions.insert(first);
            }

            row_pairs.push(pair);
        }

        Ok(Self { types, row_pairs })
    }

    // First occurrence wins; later mentions reuse the assigned id
    fn intern(types: &mut Vec<TerrainType>, name: &str) -> TerrainId {
        if let Some(existing) = types.iter().find(|terrain| terrain.name == name) {
            return existing.id;
        }
        let id = types.len() as TerrainId;
        types.push(TerrainType::new(id, name.to_string()));
        id
    }

    /// Look up a terrain type by id
    pub fn terrain(&self, id: TerrainId) -> Option<&TerrainType> {
        self.types.get(id as usize)
    }

    /// Number of distinct terrain types
    pub fn terrain_count(&self) -> usize {
        self.types.len()
    }

    /// Largest transition set any single terrain could have
    ///
    /// A terrain whose transition set is smaller than this lacks a
    /// transition tile to at least one other terrain.
    pub fn max_transitions(&self) -> usize {
        self.types.len().saturating_sub(1)
    }

    /// Terrain-id pairs per tileset row, in definition order
    pub fn row_pairs(&self) -> &[[TerrainId; 2]] {
        &self.row_pairs
    }

    /// Number of tileset rows the definitions describe
    pub fn row_count(&self) -> usize {
        self.row_pairs.len()
    }

    /// Total number of tiles the paired tileset must provide
    pub fn tile_count(&self) -> usize {
        self.row_pairs.len() * TILES_PER_ROW
    }
}
