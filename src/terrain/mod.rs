//! Terrain definitions and tile-index corner decoding
//!
//! This module contains the static lookup tables the generation algorithm
//! depends on:
//! - Terrain-type catalog built from terrain-definition rows
//! - Pure tile-index to corner-code mapping

/// Terrain-type catalog and transition tables
pub mod catalog;
/// Tile-index corner-code decoding
pub mod codec;

pub use catalog::{TerrainCatalog, TerrainId, TerrainType};
pub use codec::{Corner, CornerCodes, TileCodec};
