//! Immutable layout inputs measured in millimetres

use serde::{Deserialize, Serialize};

use crate::io::error::{Result, invalid_dimension};

/// Length in millimetres
pub type Millimeters = f64;

// Rejects zero, negative, NaN and infinite values
fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid_dimension(field, value))
    }
}

/// Rectangular floor or wall being tiled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    /// Extent along the column axis
    pub width: Millimeters,
    /// Extent along the row axis
    pub length: Millimeters,
}

impl Surface {
    /// Create a surface description
    pub const fn new(width: Millimeters, length: Millimeters) -> Self {
        Self { width, length }
    }

    /// Check both extents are positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` naming the first non-positive extent
    pub fn validate(&self) -> Result<()> {
        ensure_positive("surface.width", self.width)?;
        ensure_positive("surface.length", self.length)
    }

    /// Total area in square millimetres
    pub const fn area(&self) -> f64 {
        self.width * self.length
    }
}

/// A single tile before any trimming
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Size along the column axis
    pub width: Millimeters,
    /// Size along the row axis
    pub length: Millimeters,
}

impl Tile {
    /// Create a tile description
    pub const fn new(width: Millimeters, length: Millimeters) -> Self {
        Self { width, length }
    }

    /// Check both sizes are positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` naming the first non-positive size
    pub fn validate(&self) -> Result<()> {
        ensure_positive("tile.width", self.width)?;
        ensure_positive("tile.length", self.length)
    }

    /// Nominal area of an untrimmed tile
    pub const fn area(&self) -> f64 {
        self.width * self.length
    }
}

/// Grout joint geometry and material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grout {
    /// Joint width between neighbouring tiles
    pub size: Millimeters,
    /// Joint depth
    pub thickness: Millimeters,
    /// Material density in kilograms per litre
    pub density: f64,
}

impl Grout {
    /// Create a grout description
    pub const fn new(size: Millimeters, thickness: Millimeters, density: f64) -> Self {
        Self {
            size,
            thickness,
            density,
        }
    }

    /// Check size, thickness and density are positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` naming the first non-positive field
    pub fn validate(&self) -> Result<()> {
        ensure_positive("grout.size", self.size)?;
        ensure_positive("grout.thickness", self.thickness)?;
        ensure_positive("grout.density", self.density)
    }

    /// Joint volume in cubic millimetres for a given joint area
    pub const fn volume_for(&self, area: f64) -> f64 {
        area * self.thickness
    }

    /// Material mass for a joint volume
    ///
    /// With volume in cubic millimetres and density in kg/l the result is in
    /// kilograms scaled by one million.
    pub const fn mass_for(&self, volume: f64) -> f64 {
        volume * self.density
    }
}

/// Rectangular window or door cut out of the surface
///
/// `x` runs along the surface width and `y` along its length, both measured
/// from the leading corner of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    /// Offset along the column axis
    pub x: Millimeters,
    /// Offset along the row axis
    pub y: Millimeters,
    /// Extent along the column axis
    pub width: Millimeters,
    /// Extent along the row axis
    pub height: Millimeters,
}

impl Opening {
    /// Create an opening description
    pub const fn new(
        x: Millimeters,
        y: Millimeters,
        width: Millimeters,
        height: Millimeters,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Far edge along the column axis
    pub const fn right(&self) -> Millimeters {
        self.x + self.width
    }

    /// Far edge along the row axis
    pub const fn bottom(&self) -> Millimeters {
        self.y + self.height
    }
}

/// Validate every numeric layout input in reporting order
///
/// Surface extents are checked first, then tile sizes, then grout fields.
///
/// # Errors
///
/// Returns `InvalidDimension` for the first non-positive value found
pub fn validate_inputs(surface: &Surface, tile: &Tile, grout: &Grout) -> Result<()> {
    surface.validate()?;
    tile.validate()?;
    grout.validate()
}
