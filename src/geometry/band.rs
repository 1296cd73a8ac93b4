//! Axis band planning
//!
//! An axis of length `extent` is covered by alternating grout and tile bands,
//! always starting with a grout band. Full tiles are placed while a tile plus
//! its following joint still fits; the last tile is trimmed to the remaining
//! extent and closed by a final joint, so band sizes always sum to `extent`.

use crate::io::configuration::{BAND_TOLERANCE, MAX_BANDS_PER_AXIS};
use crate::io::error::{LayoutError, Result, invalid_dimension};

/// Material occupying a band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandKind {
    /// Joint filled with grout
    Grout,
    /// Strip of tiles
    Tile,
}

/// Contiguous strip along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Material occupying the strip
    pub kind: BandKind,
    /// Strip size along the axis
    pub size: f64,
    /// Whether this tile band was cut short of the nominal tile size
    pub trimmed: bool,
}

impl Band {
    /// Create a grout band
    pub const fn grout(size: f64) -> Self {
        Self {
            kind: BandKind::Grout,
            size,
            trimmed: false,
        }
    }

    /// Create a tile band, optionally marked as trimmed
    pub const fn tile(size: f64, trimmed: bool) -> Self {
        Self {
            kind: BandKind::Tile,
            size,
            trimmed,
        }
    }

    /// Check whether the band holds tiles
    pub const fn is_tile(&self) -> bool {
        matches!(self.kind, BandKind::Tile)
    }
}

/// Upper bound on the number of bands an axis plan can produce
///
/// Every tile band is paired with the joint before it, plus one closing joint.
fn estimate_band_count(extent: f64, unit_size: f64, separator_size: f64) -> usize {
    // Saturating float-to-int cast keeps absurd ratios at usize::MAX
    let pairs = (extent / (unit_size + separator_size)).ceil() as usize;
    pairs.saturating_mul(2).saturating_add(1)
}

/// Plan the ordered band sequence covering one axis
///
/// Odd band indices (1-based) are grout joints of `separator_size`, even
/// indices are tiles. A tile band is full-sized while `position + unit_size +
/// separator_size <= extent`; otherwise it is trimmed to `extent - position -
/// separator_size` and followed by one last joint.
///
/// Fits are decided within `extent × BAND_TOLERANCE`, so a tile that fills
/// the axis up to rounding stays full-sized and untrimmed.
///
/// When the strip left after a joint is too narrow for any tile (trimmed size
/// would be zero, negative or within the tolerance) no tile band is emitted
/// and the strip widens the preceding joint. An extent shorter than one joint yields a single grout
/// band of size `extent`.
///
/// # Errors
///
/// Returns `InvalidDimension` if any input is not a positive finite number,
/// or `GridTooLarge` if the plan would exceed `MAX_BANDS_PER_AXIS` bands
pub fn plan_axis(extent: f64, unit_size: f64, separator_size: f64) -> Result<Vec<Band>> {
    for (field, value) in [
        ("extent", extent),
        ("unit_size", unit_size),
        ("separator_size", separator_size),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(invalid_dimension(field, value));
        }
    }

    let estimate = estimate_band_count(extent, unit_size, separator_size);
    if estimate > MAX_BANDS_PER_AXIS {
        return Err(LayoutError::GridTooLarge {
            extent,
            bands: estimate,
            limit: MAX_BANDS_PER_AXIS,
        });
    }

    // Sums of decimal sizes drift by a few ulps; fits and slivers are judged within this margin
    let tolerance = extent * BAND_TOLERANCE;

    let mut bands = Vec::with_capacity(estimate);
    let mut position = 0.0;
    let mut index = 1_usize;

    while position < extent {
        if index % 2 == 1 {
            let remaining = extent - position;
            if remaining <= separator_size + tolerance {
                bands.push(Band::grout(remaining));
                position = extent;
            } else {
                bands.push(Band::grout(separator_size));
                position += separator_size;
            }
        } else if position + unit_size + separator_size <= extent + tolerance {
            bands.push(Band::tile(unit_size, false));
            position += unit_size;
        } else {
            let trimmed = extent - position - separator_size;
            if trimmed > tolerance {
                bands.push(Band::tile(trimmed, true));
                position = extent - separator_size;
            } else {
                // Strip narrower than a joint: widen the joint instead
                if let Some(last) = bands.last_mut() {
                    last.size += extent - position;
                }
                position = extent;
            }
        }
        index += 1;
    }

    log::debug!(
        "planned {} bands over {extent} mm (unit {unit_size}, joint {separator_size})",
        bands.len()
    );

    Ok(bands)
}
