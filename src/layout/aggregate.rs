//! Tile and grout aggregation
//!
//! Grout is accounted row by row. A grout row spans the whole surface width,
//! minus the opening width when the row contains opening cells. A tile row
//! contributes the area of its grout cells, which accounts for the trimmed
//! final tile row without any extra bookkeeping.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::geometry::band::BandKind;
use crate::geometry::dimensions::{Grout, Opening, Surface, Tile, validate_inputs};
use crate::geometry::grid::{Grid, build_grid};
use crate::io::error::Result;
use crate::layout::classify::{Cell, CellKind, classify_with};
use crate::layout::opening::{OpeningTest, validate_opening};

/// Totals and cell classification for one surface
///
/// Lengths follow the input unit (millimetres), so areas are in mm², volume
/// in mm³ and mass in kg scaled by one million when density is in kg/l.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Number of tile cells
    pub tile_count: usize,
    /// Nominal tile area (`tile_count × tile.width × tile.length`)
    pub tile_area: f64,
    /// Area actually covered by tile cells, trimmed tiles included
    pub covered_tile_area: f64,
    /// Total grout joint area
    pub grout_area: f64,
    /// Grout volume (`grout_area × thickness`)
    pub grout_volume: f64,
    /// Grout mass (`grout_volume × density`)
    pub grout_mass: f64,
    /// Grout area contributed by each row, indexed from row 1
    pub row_grout_areas: Vec<f64>,
    /// Number of grout cells in each row, indexed from row 1
    pub row_grout_cells: Vec<usize>,
    /// Rows holding at least one opening cell, indexed from row 1
    pub opening_rows: BitVec,
    /// Cell classification indexed by `[row - 1, col - 1]`
    pub cells: Array2<CellKind>,
    /// Grid the layout was computed on
    pub grid: Grid,
    /// Opening cut out of the surface, if any
    pub opening: Option<Opening>,
}

impl LayoutResult {
    /// Classification of the cell at 1-based (row, column)
    pub fn cell(&self, row: usize, col: usize) -> Option<CellKind> {
        let index = [row.checked_sub(1)?, col.checked_sub(1)?];
        self.cells.get(index).copied()
    }

    /// Replay every classified cell in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.indexed_iter().map(|((row, col), kind)| Cell {
            row: row + 1,
            col: col + 1,
            kind: *kind,
        })
    }

    /// Check whether a 1-based row holds opening cells
    pub fn intersects_opening(&self, row: usize) -> bool {
        row.checked_sub(1)
            .and_then(|index| self.opening_rows.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Number of cells removed by the opening
    pub fn opening_cell_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|kind| matches!(kind, CellKind::Opening))
            .count()
    }

    /// Grout area contributed by a 1-based row
    pub fn row_grout_area(&self, row: usize) -> Option<f64> {
        row.checked_sub(1)
            .and_then(|index| self.row_grout_areas.get(index))
            .copied()
    }
}

/// Aggregate a classified cell stream into layout totals
///
/// Every cell of the grid has to be present in `cells`; missing cells are
/// treated as empty grout.
pub fn aggregate<I>(grid: &Grid, cells: I, opening: Option<&Opening>) -> LayoutResult
where
    I: IntoIterator<Item = Cell>,
{
    let rows = grid.row_count();
    let cols = grid.column_count();

    let mut kinds = Array2::from_elem((rows, cols), CellKind::Grout { area: 0.0 });
    let mut opening_rows = bitvec![0; rows];
    let mut row_grout_cells = vec![0_usize; rows];
    let mut row_cell_areas = vec![0.0_f64; rows];
    let mut tile_count = 0;
    let mut covered_tile_area = 0.0;

    for cell in cells {
        let (Some(row), Some(col)) = (cell.row.checked_sub(1), cell.col.checked_sub(1)) else {
            continue;
        };

        match cell.kind {
            CellKind::Tile { .. } => {
                tile_count += 1;
                covered_tile_area += grid.cell_area(cell.row, cell.col).unwrap_or(0.0);
            }
            CellKind::Grout { area } => {
                if let Some(count) = row_grout_cells.get_mut(row) {
                    *count += 1;
                }
                if let Some(total) = row_cell_areas.get_mut(row) {
                    *total += area;
                }
            }
            CellKind::Opening => {
                if row < rows {
                    opening_rows.set(row, true);
                }
            }
        }

        if let Some(slot) = kinds.get_mut([row, col]) {
            *slot = cell.kind;
        }
    }

    let surface_width = grid.surface.width;
    let row_grout_areas: Vec<f64> = grid
        .rows()
        .bands()
        .iter()
        .zip(opening_rows.iter().by_vals())
        .zip(&row_cell_areas)
        .map(|((band, in_opening), cell_area)| match (band.kind, opening) {
            (BandKind::Grout, Some(cut)) if in_opening => band.size * (surface_width - cut.width),
            (BandKind::Grout, _) => band.size * surface_width,
            (BandKind::Tile, _) => *cell_area,
        })
        .collect();

    let grout_area: f64 = row_grout_areas.iter().sum();
    let grout_volume = grid.grout.volume_for(grout_area);
    let grout_mass = grid.grout.mass_for(grout_volume);
    let tile_area = tile_count as f64 * grid.tile.area();

    log::debug!(
        "aggregated {tile_count} tiles, grout area {grout_area} mm² over {rows} rows ({} touching the opening)",
        opening_rows.count_ones()
    );

    LayoutResult {
        tile_count,
        tile_area,
        covered_tile_area,
        grout_area,
        grout_volume,
        grout_mass,
        row_grout_areas,
        row_grout_cells,
        opening_rows,
        cells: kinds,
        grid: grid.clone(),
        opening: opening.copied(),
    }
}

/// Lay out a surface using the trailing-corner opening test
///
/// # Errors
///
/// Returns `InvalidDimension` for non-positive inputs, `OpeningOutOfBounds`
/// for an opening outside the surface, or `GridTooLarge` / `TooManyCells`
/// when the grid would be too large
pub fn layout(
    surface: &Surface,
    tile: &Tile,
    grout: &Grout,
    opening: Option<&Opening>,
) -> Result<LayoutResult> {
    layout_with(surface, tile, grout, opening, OpeningTest::default())
}

/// Lay out a surface with an explicit opening test
///
/// All inputs are validated before the grid is built; nothing is computed
/// for invalid input.
///
/// # Errors
///
/// Returns `InvalidDimension` for non-positive inputs, `OpeningOutOfBounds`
/// for an opening outside the surface, or `GridTooLarge` / `TooManyCells`
/// when the grid would be too large
pub fn layout_with(
    surface: &Surface,
    tile: &Tile,
    grout: &Grout,
    opening: Option<&Opening>,
    test: OpeningTest,
) -> Result<LayoutResult> {
    validate_inputs(surface, tile, grout)?;
    if let Some(opening) = opening {
        validate_opening(surface, opening)?;
    }

    let grid = build_grid(surface, tile, grout)?;
    let cells = classify_with(&grid, opening, test);
    Ok(aggregate(&grid, cells, opening))
}
