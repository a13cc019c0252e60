//! Flat index-addressed grid of placed tile indices
//!
//! Neighbor existence is a bounds check against signed `(col, row)`
//! arithmetic rather than pointer nullability; cells start unset and are
//! filled in scan order. Row 0 is the bottom of the map.

use ndarray::Array2;

/// Mutable grid of tile indices under construction
///
/// Exclusively owned by the generator for the duration of one run; the
/// constraint engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    // Indexed [row, col]
    cells: Array2<Option<usize>>,
}

impl TileGrid {
    /// Create an empty grid of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), None),
        }
    }

    /// Grid width in tiles
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid height in tiles
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Tile at signed `(col, row)`, or `None` outside bounds or not yet placed
    pub fn tile(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 {
            return None;
        }
        self.cells
            .get((row as usize, col as usize))
            .copied()
            .flatten()
    }

    /// Record the picked tile index for a cell
    pub fn place(&mut self, col: usize, row: usize, tile: usize) {
        if let Some(cell) = self.cells.get_mut((row, col)) {
            *cell = Some(tile);
        }
    }

    /// True once every cell holds a tile
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate placed cells as `(col, row, tile)`
    pub fn iter_placed(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((row, col), cell)| cell.map(|tile| (col, row, tile)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_reads_resolve_to_no_neighbor() {
        let grid = TileGrid::new(3, 2);
        assert_eq!(grid.tile(-1, 0), None);
        assert_eq!(grid.tile(0, -1), None);
        assert_eq!(grid.tile(3, 0), None);
        assert_eq!(grid.tile(0, 2), None);
    }

    #[test]
    fn test_unplaced_cells_read_as_absent() {
        let mut grid = TileGrid::new(3, 2);
        assert_eq!(grid.tile(1, 1), None);
        assert!(!grid.is_complete());

        grid.place(1, 1, 7);
        assert_eq!(grid.tile(1, 1), Some(7));
    }

    #[test]
    fn test_completeness_and_iteration() {
        let mut grid = TileGrid::new(2, 2);
        for row in 0..2 {
            for col in 0..2 {
                grid.place(col, row, row * 2 + col);
            }
        }

        assert!(grid.is_complete());
        let placed: Vec<_> = grid.iter_placed().collect();
        assert_eq!(placed.len(), 4);
        assert!(placed.contains(&(1, 0, 1)));
        assert!(placed.contains(&(0, 1, 2)));
    }
}
