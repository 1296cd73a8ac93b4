//! Two-axis layout grid with cumulative band boundaries
//!
//! Columns run along the surface width and rows along its length. Both axes
//! are planned independently and indexed from 1, matching the convention that
//! row 1 and column 1 are grout joints.

use crate::geometry::band::{Band, BandKind, plan_axis};
use crate::geometry::dimensions::{Grout, Surface, Tile, validate_inputs};
use crate::io::configuration::MAX_GRID_CELLS;
use crate::io::error::{LayoutError, Result};

/// Band sequence for one axis together with its prefix sums
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPlan {
    bands: Vec<Band>,
    /// Far edge of each band, measured from the start of the axis
    boundaries: Vec<f64>,
    last_tile_band_size: Option<f64>,
}

impl AxisPlan {
    /// Wrap a planned band sequence and compute its boundaries
    pub fn new(bands: Vec<Band>) -> Self {
        let boundaries = bands
            .iter()
            .scan(0.0, |position, band| {
                *position += band.size;
                Some(*position)
            })
            .collect();

        let last_tile_band_size = bands
            .iter()
            .rev()
            .find(|band| band.is_tile())
            .map(|band| band.size);

        Self {
            bands,
            boundaries,
            last_tile_band_size,
        }
    }

    /// Number of bands on the axis
    pub const fn len(&self) -> usize {
        self.bands.len()
    }

    /// Check if the axis has no bands
    pub const fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// All bands in axis order
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Cumulative far edge of every band in axis order
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Band at a 1-based index
    pub fn band(&self, index: usize) -> Option<&Band> {
        index.checked_sub(1).and_then(|i| self.bands.get(i))
    }

    /// Size of the band at a 1-based index
    pub fn size(&self, index: usize) -> Option<f64> {
        self.band(index).map(|band| band.size)
    }

    /// Near edge of the band at a 1-based index
    pub fn start(&self, index: usize) -> Option<f64> {
        match index.checked_sub(1)? {
            0 => self.boundaries.first().map(|_| 0.0),
            i if i < self.boundaries.len() => self.boundaries.get(i - 1).copied(),
            _ => None,
        }
    }

    /// Far edge of the band at a 1-based index
    pub fn end(&self, index: usize) -> Option<f64> {
        index.checked_sub(1).and_then(|i| self.boundaries.get(i)).copied()
    }

    /// Total covered extent
    pub fn extent(&self) -> f64 {
        self.boundaries.last().copied().unwrap_or(0.0)
    }

    /// Number of tile bands on the axis
    pub fn tile_band_count(&self) -> usize {
        self.bands.iter().filter(|band| band.is_tile()).count()
    }

    /// Size of the final tile band, trimmed or not
    ///
    /// `None` when the axis is too short to hold any tile.
    pub const fn last_tile_band_size(&self) -> Option<f64> {
        self.last_tile_band_size
    }

    /// Kind of the band at a 1-based index
    pub fn kind(&self, index: usize) -> Option<BandKind> {
        self.band(index).map(|band| band.kind)
    }
}

/// Rectangle occupied by a single grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    /// Near edge along the column axis
    pub left: f64,
    /// Near edge along the row axis
    pub top: f64,
    /// Far edge along the column axis
    pub right: f64,
    /// Far edge along the row axis
    pub bottom: f64,
}

impl CellBounds {
    /// Cell extent along the column axis
    pub const fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Cell extent along the row axis
    pub const fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Column and row band plans for one surface
///
/// Built once per layout request and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Surface the grid covers
    pub surface: Surface,
    /// Nominal tile used for planning
    pub tile: Tile,
    /// Grout joints separating tiles
    pub grout: Grout,
    columns: AxisPlan,
    rows: AxisPlan,
}

impl Grid {
    /// Band plan along the surface width
    pub const fn columns(&self) -> &AxisPlan {
        &self.columns
    }

    /// Band plan along the surface length
    pub const fn rows(&self) -> &AxisPlan {
        &self.rows
    }

    /// Number of column bands
    pub const fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of row bands
    pub const fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.columns.len() * self.rows.len()
    }

    /// Width of the last tile column, trimmed or not
    pub const fn last_tile_column_size(&self) -> Option<f64> {
        self.columns.last_tile_band_size()
    }

    /// Height of the last tile row, trimmed or not
    pub const fn last_tile_row_size(&self) -> Option<f64> {
        self.rows.last_tile_band_size()
    }

    /// Rectangle of the cell at 1-based (row, column)
    pub fn cell_bounds(&self, row: usize, col: usize) -> Option<CellBounds> {
        Some(CellBounds {
            left: self.columns.start(col)?,
            top: self.rows.start(row)?,
            right: self.columns.end(col)?,
            bottom: self.rows.end(row)?,
        })
    }

    /// Area of the cell at 1-based (row, column)
    pub fn cell_area(&self, row: usize, col: usize) -> Option<f64> {
        Some(self.columns.size(col)? * self.rows.size(row)?)
    }
}

/// Plan both axes of a surface
///
/// Columns come from `(surface.width, tile.width, grout.size)` and rows from
/// `(surface.length, tile.length, grout.size)`.
///
/// # Errors
///
/// Returns `InvalidDimension` if any surface, tile or grout value is not
/// positive, `GridTooLarge` if either axis would hold too many bands, or
/// `TooManyCells` if both axes together exceed `MAX_GRID_CELLS`
pub fn build_grid(surface: &Surface, tile: &Tile, grout: &Grout) -> Result<Grid> {
    validate_inputs(surface, tile, grout)?;

    let columns = AxisPlan::new(plan_axis(surface.width, tile.width, grout.size)?);
    let rows = AxisPlan::new(plan_axis(surface.length, tile.length, grout.size)?);

    let cells = columns.len().saturating_mul(rows.len());
    if cells > MAX_GRID_CELLS {
        return Err(LayoutError::TooManyCells {
            columns: columns.len(),
            rows: rows.len(),
            cells,
            limit: MAX_GRID_CELLS,
        });
    }

    log::debug!(
        "grid {}x{} bands ({} tile columns, {} tile rows)",
        columns.len(),
        rows.len(),
        columns.tile_band_count(),
        rows.tile_band_count()
    );

    Ok(Grid {
        surface: *surface,
        tile: *tile,
        grout: *grout,
        columns,
        rows,
    })
}
