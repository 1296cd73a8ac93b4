//! Grid sink contract and an in-memory sheet implementation
//!
//! A sink receives cell-addressed values and classified cells. Addresses are
//! 1-based (row, column) pairs, like spreadsheet cells.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::geometry::grid::Grid;
use crate::io::error::{Result, sink_unavailable};
use crate::layout::classify::{Cell, CellClass, CellKind};

/// Value written into a sheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum SheetValue {
    /// Numeric value
    Number(f64),
    /// Free text
    Text(String),
}

impl fmt::Display for SheetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<f64> for SheetValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<usize> for SheetValue {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<String> for SheetValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for SheetValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// External consumer of classified cells and summary values
///
/// Calls arrive as `begin`, any number of `write_value`/`write_cell`, then
/// `finish`. Failures surface as `SinkUnavailable` and never touch the layout
/// result that is being written.
pub trait GridSink {
    /// Human-readable sink description used in error reports
    fn describe(&self) -> String;

    /// Prepare for a grid of the given shape
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot accept a grid of this shape
    fn begin(&mut self, _grid: &Grid) -> Result<()> {
        Ok(())
    }

    /// Store a value at a 1-based (row, column) address
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the value
    fn write_value(&mut self, row: usize, col: usize, value: SheetValue) -> Result<()>;

    /// Store a classified cell with its fill class and label
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the cell
    fn write_cell(&mut self, cell: &Cell) -> Result<()>;

    /// Flush everything written so far
    ///
    /// # Errors
    ///
    /// Returns `SinkUnavailable` if the target cannot be written
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Contents of one sheet cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetEntry {
    /// Fill class, for cells inside the grid
    pub class: Option<CellClass>,
    /// Stored value
    pub value: Option<SheetValue>,
}

/// Sparse in-memory sheet
///
/// Mirrors how a spreadsheet would receive the layout: writing a cell sets its
/// fill and, for tiles, its number; plain values overwrite only the value.
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    title: String,
    entries: BTreeMap<(usize, usize), SheetEntry>,
}

impl MemorySheet {
    /// Create an empty sheet
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            entries: BTreeMap::new(),
        }
    }

    /// Sheet title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Entry at a 1-based (row, column) address
    pub fn entry(&self, row: usize, col: usize) -> Option<&SheetEntry> {
        self.entries.get(&(row, col))
    }

    /// Value at a 1-based (row, column) address
    pub fn value(&self, row: usize, col: usize) -> Option<&SheetValue> {
        self.entry(row, col).and_then(|entry| entry.value.as_ref())
    }

    /// Fill class at a 1-based (row, column) address
    pub fn class(&self, row: usize, col: usize) -> Option<CellClass> {
        self.entry(row, col).and_then(|entry| entry.class)
    }

    /// Number of non-empty entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last used (row, column), or `(0, 0)` for an empty sheet
    pub fn extent(&self) -> (usize, usize) {
        self.entries
            .keys()
            .fold((0, 0), |(rows, cols), &(row, col)| (rows.max(row), cols.max(col)))
    }

    /// Render all values as tab-separated text, one line per row
    ///
    /// Cells without a value are left empty; fills are not exported.
    pub fn to_tsv(&self) -> String {
        let (rows, cols) = self.extent();
        let mut output = String::new();

        for row in 1..=rows {
            let line = (1..=cols)
                .map(|col| {
                    self.value(row, col)
                        .map(|value| value.to_string().replace(['\t', '\n'], " "))
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>()
                .join("\t");
            output.push_str(line.trim_end_matches('\t'));
            output.push('\n');
        }

        output
    }

    /// Write the sheet as tab-separated text
    ///
    /// # Errors
    ///
    /// Returns `SinkUnavailable` if the file cannot be created or written,
    /// for example when it is locked by another application
    pub fn write_tsv(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_tsv()).map_err(|e| sink_unavailable(&path.display(), e))
    }
}

impl GridSink for MemorySheet {
    fn describe(&self) -> String {
        format!("sheet '{}'", self.title)
    }

    fn write_value(&mut self, row: usize, col: usize, value: SheetValue) -> Result<()> {
        self.entries.entry((row, col)).or_default().value = Some(value);
        Ok(())
    }

    fn write_cell(&mut self, cell: &Cell) -> Result<()> {
        let entry = self.entries.entry((cell.row, cell.col)).or_default();
        entry.class = Some(cell.kind.class());
        if let CellKind::Tile { number } = cell.kind {
            entry.value = Some(SheetValue::from(number));
        }
        Ok(())
    }
}
