//! PNG rendering of a classified layout grid

use std::path::{Path, PathBuf};

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::geometry::grid::{AxisPlan, Grid};
use crate::io::configuration::MAX_IMAGE_DIMENSION;
use crate::io::error::{Result, invalid_dimension, sink_unavailable};
use crate::io::job::Palette;
use crate::io::sink::{GridSink, SheetValue};
use crate::layout::classify::Cell;

// Pixel span of every band; each band gets at least one pixel so joints stay visible
fn pixel_spans(axis: &AxisPlan, scale: f64) -> Vec<(u32, u32)> {
    let mut offset = 0_u32;
    axis.bands()
        .iter()
        .map(|band| {
            let size = ((band.size * scale).round() as u32).max(1);
            let span = (offset, size);
            offset = offset.saturating_add(size);
            span
        })
        .collect()
}

fn span_total(spans: &[(u32, u32)]) -> u32 {
    spans
        .last()
        .map_or(0, |&(offset, size)| offset.saturating_add(size))
}

/// Grid sink drawing every cell as a filled rectangle
///
/// Band sizes are scaled from millimetres to pixels. Values and summary lines
/// are not drawn.
pub struct PngSink {
    path: PathBuf,
    palette: Palette,
    scale: f64,
    columns: Vec<(u32, u32)>,
    rows: Vec<(u32, u32)>,
    image: Option<RgbaImage>,
}

impl PngSink {
    /// Create a sink writing to `path` at `scale` pixels per millimetre
    pub fn new(path: &Path, palette: Palette, scale: f64) -> Self {
        Self {
            path: path.to_path_buf(),
            palette,
            scale,
            columns: Vec::new(),
            rows: Vec::new(),
            image: None,
        }
    }

    /// Rendered image, available after `begin`
    pub const fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    /// Pixel dimensions of the rendered image
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(ImageBuffer::dimensions)
    }
}

impl GridSink for PngSink {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn begin(&mut self, grid: &Grid) -> Result<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(invalid_dimension("render.scale", self.scale));
        }

        self.columns = pixel_spans(grid.columns(), self.scale);
        self.rows = pixel_spans(grid.rows(), self.scale);

        let width = span_total(&self.columns);
        let height = span_total(&self.rows);
        if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
            return Err(sink_unavailable(
                &self.describe(),
                format!(
                    "image of {width}x{height} px exceeds {MAX_IMAGE_DIMENSION} px, lower the scale"
                ),
            ));
        }

        log::debug!("rendering {width}x{height} px to {}", self.path.display());
        self.image = Some(ImageBuffer::new(width, height));
        Ok(())
    }

    fn write_value(&mut self, _row: usize, _col: usize, _value: SheetValue) -> Result<()> {
        Ok(())
    }

    fn write_cell(&mut self, cell: &Cell) -> Result<()> {
        let fill = self.palette.fill_for(cell.kind.class())?;

        let columns = cell.col.checked_sub(1).and_then(|i| self.columns.get(i));
        let rows = cell.row.checked_sub(1).and_then(|i| self.rows.get(i));
        let (Some(&(x0, w)), Some(&(y0, h)), Some(image)) = (columns, rows, self.image.as_mut())
        else {
            return Err(sink_unavailable(
                &self.path.display(),
                format!("cell ({}, {}) outside the prepared image", cell.row, cell.col),
            ));
        };

        let color = Rgba(fill.0);
        for y in y0..y0.saturating_add(h) {
            for x in x0..x0.saturating_add(w) {
                if let Some(pixel) = image.get_pixel_mut_checked(x, y) {
                    *pixel = color;
                }
            }
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let image = self.image.as_ref().ok_or_else(|| {
            sink_unavailable(&self.path.display(), "nothing was rendered".to_string())
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| sink_unavailable(&parent.display(), e))?;
            }
        }

        image
            .save(&self.path)
            .map_err(|e| sink_unavailable(&self.path.display(), e))
    }
}
