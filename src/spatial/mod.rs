//! Grid dimensions and cell storage
//!
//! This module contains:
//! - Grid shape validation and per-cell quad layout
//! - Dense cell storage with paint and resize operations
//! - Fill policies for newly created cells

/// Policies for the initial tile index of new cells
pub mod fill;
/// Grid shape, cells and quad layout
pub mod grid;

pub use fill::{CellFill, RandomFill, UniformFill};
pub use grid::{Cell, Grid, GridShape};
