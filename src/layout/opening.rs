//! Opening validation and cell membership

use crate::geometry::dimensions::{Opening, Surface};
use crate::geometry::grid::CellBounds;
use crate::io::error::{Result, invalid_dimension, opening_out_of_bounds};

/// Rule deciding whether a grid cell belongs to the opening
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OpeningTest {
    /// Only the cell's far corner has to lie inside the closed opening rectangle
    ///
    /// Cells straddling the near edges of the opening are kept, cells
    /// straddling the far edges are removed.
    #[default]
    TrailingCorner,
    /// The cell rectangle has to overlap the opening with positive area
    Overlap,
}

impl OpeningTest {
    /// Check whether a cell falls inside the opening
    pub fn contains(self, opening: &Opening, cell: &CellBounds) -> bool {
        match self {
            Self::TrailingCorner => {
                (opening.x..=opening.right()).contains(&cell.right)
                    && (opening.y..=opening.bottom()).contains(&cell.bottom)
            }
            Self::Overlap => {
                cell.left < opening.right()
                    && cell.right > opening.x
                    && cell.top < opening.bottom()
                    && cell.bottom > opening.y
            }
        }
    }
}

/// Check an opening is well formed and fully contained in the surface
///
/// An opening touching the far surface edge (`x + width == surface.width`)
/// is accepted.
///
/// # Errors
///
/// Returns `InvalidDimension` if the opening width or height is not positive,
/// or `OpeningOutOfBounds` if it starts before the surface origin or extends
/// past the surface width or length
pub fn validate_opening(surface: &Surface, opening: &Opening) -> Result<()> {
    for (field, value) in [
        ("opening.width", opening.width),
        ("opening.height", opening.height),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(invalid_dimension(field, value));
        }
    }

    if opening.x.is_nan() || opening.x < 0.0 {
        return Err(opening_out_of_bounds("opening.x", opening.x, 0.0));
    }
    if opening.y.is_nan() || opening.y < 0.0 {
        return Err(opening_out_of_bounds("opening.y", opening.y, 0.0));
    }
    if opening.right() > surface.width {
        return Err(opening_out_of_bounds(
            "opening.x + opening.width",
            opening.right(),
            surface.width,
        ));
    }
    if opening.bottom() > surface.length {
        return Err(opening_out_of_bounds(
            "opening.y + opening.height",
            opening.bottom(),
            surface.length,
        ));
    }

    Ok(())
}
