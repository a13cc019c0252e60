//! Spatial data structures for maps under construction

/// Arena-style tile grid with signed-coordinate neighbor access
pub mod grid;

pub use grid::TileGrid;
