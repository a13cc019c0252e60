//! Input/output operations: configuration, tileset access, rendering, CLI

/// Command-line interface for map generation runs
pub mod cli;
/// Tileset configuration format, validation, and crate constants
pub mod configuration;
/// Error types for configuration and generation operations
pub mod error;
/// Generation progress display
pub mod progress;
/// Output-map composition from a generated grid
pub mod render;
/// Tileset image loading and slicing
pub mod tileset;
