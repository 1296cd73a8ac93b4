//! Tile and grout grid layout for rectangular floors and walls
//!
//! A surface is partitioned along both axes into alternating grout and tile
//! bands, every resulting cell is classified as tile, grout or opening, and
//! the grout material needed to fill the joints is aggregated into area,
//! volume and mass totals.

#![forbid(unsafe_code)]

/// Surface, tile and grout value objects with axis band planning and grid construction
pub mod geometry;
/// Input/output operations, error handling, sinks and batch processing
pub mod io;
/// Opening validation, cell classification and grout aggregation
pub mod layout;

pub use io::error::{LayoutError, Result};
pub use layout::aggregate::{LayoutResult, layout, layout_with};
