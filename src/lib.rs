//! Procedural terrain map generation using corner-matching Wang tiles
//!
//! The system derives per-corner terrain codes from tile indices, constrains
//! each map cell against its already-placed neighbors, and fills a grid with
//! tile indices such that every shared corner carries matching terrain.

#![forbid(unsafe_code)]

/// Constraint propagation, candidate enumeration, and map generation
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tile grid arena for maps under construction
pub mod spatial;
/// Terrain-type bookkeeping and tile-index corner decoding
pub mod terrain;

pub use io::error::{AutoTileError, Result};
