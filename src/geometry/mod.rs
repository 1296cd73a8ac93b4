//! Surface geometry and grid construction
//!
//! This module contains the geometric side of a layout:
//! - Immutable surface, tile, grout and opening descriptions
//! - Axis band planning (alternating grout and tile strips)
//! - Grid construction with cumulative band boundaries

/// Axis band planning with trimmed final tile bands
pub mod band;
/// Surface, tile, grout and opening value objects
pub mod dimensions;
/// Two-axis grid built from band plans
pub mod grid;

pub use band::{Band, BandKind, plan_axis};
pub use dimensions::{Grout, Millimeters, Opening, Surface, Tile, validate_inputs};
pub use grid::{AxisPlan, CellBounds, Grid, build_grid};
