//! Bit-vector set over tileset indices

use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Set of tile indices satisfying a match mask
///
/// Backed by a fixed-width bit vector spanning the whole tileset; iteration
/// yields indices in ascending order, which keeps the n-th-member draw
/// deterministic for a given random value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
}

impl CandidateSet {
    /// Create a set with no candidates over `tile_count` indices
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Insert a tile index; out-of-range indices are ignored
    pub fn insert(&mut self, tile: usize) {
        if tile < self.bits.len() {
            self.bits.set(tile, true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// True when no candidates are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of candidates in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// The n-th candidate in ascending index order
    pub fn nth(&self, n: usize) -> Option<usize> {
        self.bits.iter_ones().nth(n)
    }

    /// Iterate candidates in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all candidates as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CandidateSet({} tiles: {:?})", self.len(), self.to_vec())
    }
}
