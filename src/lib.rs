//! Tile-grid terrain core: mesh building, texture atlas tiles and grid picking
//!
//! A grid of cells, each naming one region of a texture atlas, is turned into
//! a flat triangle mesh centered on the world origin. Picking maps world
//! points back to cells for painting and click-to-move.

#![forbid(unsafe_code)]

/// Tile regions of an atlas texture
pub mod atlas;
/// Editing sessions: tool modes, brush, inspectors
pub mod editor;
/// Mesh generation and picking
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Host-driven runtime components
pub mod runtime;
/// Grid dimensions, cells and fill policies
pub mod spatial;

pub use io::error::{Result, TerrainError};
