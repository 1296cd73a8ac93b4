//! Summary figures and sheet report emission
//!
//! The report places band sizes along row 1 and column 1, the classified
//! cells over the grid, per-row grout areas one column past the grid and a
//! summary block two rows below it.

use crate::io::configuration::{
    GROUT_AREA_COLUMN, GROUT_MASS_COLUMN, GROUT_VOLUME_COLUMN, MM2_PER_M2, MM3_PER_LITRE,
    SUMMARY_ROW_OFFSET, TILE_AREA_COLUMN, TILE_COUNT_COLUMN,
};
use crate::io::error::Result;
use crate::io::sink::{GridSink, SheetValue};
use crate::layout::aggregate::LayoutResult;

/// Layout totals converted to reporting units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of tiles used
    pub tile_count: usize,
    /// Nominal tile area in m²
    pub tile_area_m2: f64,
    /// Grout area in m²
    pub grout_area_m2: f64,
    /// Grout volume in litres
    pub grout_volume_litres: f64,
    /// Grout mass in kg
    pub grout_mass_kg: f64,
}

impl Summary {
    /// Convert millimetre-based totals
    pub fn from_result(result: &LayoutResult) -> Self {
        Self {
            tile_count: result.tile_count,
            tile_area_m2: result.tile_area / MM2_PER_M2,
            grout_area_m2: result.grout_area / MM2_PER_M2,
            grout_volume_litres: result.grout_volume / MM3_PER_LITRE,
            grout_mass_kg: result.grout_mass / MM3_PER_LITRE,
        }
    }

    /// Summary lines paired with the column of their numeric value
    pub fn lines(&self) -> [(String, usize, f64); 5] {
        [
            (
                format!("Tiles used: {} pcs", self.tile_count),
                TILE_COUNT_COLUMN,
                self.tile_count as f64,
            ),
            (
                format!("Tile area: {} m2", self.tile_area_m2),
                TILE_AREA_COLUMN,
                self.tile_area_m2,
            ),
            (
                format!("Grout area: {} m2", self.grout_area_m2),
                GROUT_AREA_COLUMN,
                self.grout_area_m2,
            ),
            (
                format!("Grout volume: {} l", self.grout_volume_litres),
                GROUT_VOLUME_COLUMN,
                self.grout_volume_litres,
            ),
            (
                format!("Grout mass: {} kg", self.grout_mass_kg),
                GROUT_MASS_COLUMN,
                self.grout_mass_kg,
            ),
        ]
    }
}

/// One-line description of the opening, or of its absence
pub fn describe_opening(result: &LayoutResult) -> String {
    result.opening.map_or_else(
        || "No opening".to_string(),
        |opening| {
            format!(
                "Opening position: {}x{}, Opening size: {}x{}",
                opening.x, opening.y, opening.width, opening.height
            )
        },
    )
}

/// One-line description of surface, tile and grout inputs
pub fn describe_inputs(result: &LayoutResult) -> String {
    let grid = &result.grid;
    format!(
        "Surface: {}x{}, Tile: {}x{}, Grout: {}mm x {}mm, Grout density: {} kg/l",
        grid.surface.width,
        grid.surface.length,
        grid.tile.width,
        grid.tile.length,
        grid.grout.size,
        grid.grout.thickness,
        grid.grout.density
    )
}

/// Write a complete layout report into a sink
///
/// Every cell is written in row-major order, followed by per-row grout areas
/// and the summary block. The sink is finished before returning.
///
/// # Errors
///
/// Returns the first error raised by the sink; the layout result is left
/// untouched and can be written to another sink
pub fn emit_report<S>(sink: &mut S, title: &str, result: &LayoutResult) -> Result<()>
where
    S: GridSink + ?Sized,
{
    let grid = &result.grid;
    let rows = grid.row_count();
    let cols = grid.column_count();

    sink.begin(grid)?;

    for (index, band) in grid.columns().bands().iter().enumerate() {
        sink.write_value(1, index + 1, SheetValue::Number(band.size))?;
    }
    for (index, band) in grid.rows().bands().iter().enumerate() {
        sink.write_value(index + 1, 1, SheetValue::Number(band.size))?;
    }

    for cell in result.iter_cells() {
        sink.write_cell(&cell)?;
    }

    for (index, area) in result.row_grout_areas.iter().enumerate() {
        sink.write_value(index + 1, cols + 1, SheetValue::Number(*area))?;
    }

    let top = rows + SUMMARY_ROW_OFFSET;
    sink.write_value(top, 1, SheetValue::from(title))?;
    sink.write_value(top + 1, 1, SheetValue::from(describe_opening(result)))?;
    sink.write_value(top + 2, 1, SheetValue::from(describe_inputs(result)))?;

    let summary = Summary::from_result(result);
    for (offset, (text, column, value)) in summary.lines().into_iter().enumerate() {
        let row = top + 3 + offset;
        sink.write_value(row, 1, SheetValue::Text(text))?;
        sink.write_value(row, column, SheetValue::Number(value))?;
    }

    sink.finish()
}
