//! Layout computation over a planned grid
//!
//! Validates the opening, classifies every grid cell and aggregates tile and
//! grout totals into a single immutable result.

/// Tile and grout totals and the `layout` entry points
pub mod aggregate;
/// Row-major cell classification stream
pub mod classify;
/// Opening containment checks and cell membership tests
pub mod opening;

pub use aggregate::{LayoutResult, aggregate, layout, layout_with};
pub use classify::{Cell, CellClass, CellKind, CellStream, classify, classify_with};
pub use opening::{OpeningTest, validate_opening};
