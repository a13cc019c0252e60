//! Constraint-based tile selection and map generation
//!
//! Each cell's match mask is accumulated from its placed left and bottom
//! neighbors, optionally relaxed against the lower-right diagonal, and then
//! resolved by a uniform random draw over the matching tileset indices.

/// Bit-vector sets of candidate tile indices
pub mod candidates;
/// Match-mask construction and per-cell tile selection
pub mod constraint;
/// Raster-scan map generation
pub mod generator;

pub use candidates::CandidateSet;
pub use constraint::{ConstraintEngine, MatchMask};
pub use generator::MapGenerator;
