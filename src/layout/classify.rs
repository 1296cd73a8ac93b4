//! Row-major cell classification
//!
//! Every (row, column) pair of a grid is classified in priority order:
//! opening membership first, then tile when both band indices are even,
//! grout otherwise. Tiles are numbered from 1 in the order they are visited.

use std::iter::FusedIterator;

use crate::geometry::dimensions::Opening;
use crate::geometry::grid::Grid;
use crate::layout::opening::OpeningTest;

/// Classification of a single cell with its derived value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellKind {
    /// Tile cell carrying its running number (1-based, row-major)
    Tile {
        /// Position of the tile in row-major visiting order
        number: usize,
    },
    /// Grout cell carrying its area (column band width times row band height)
    Grout {
        /// Cell area in square millimetres
        area: f64,
    },
    /// Cell removed by the opening
    Opening,
}

/// Value-free cell classification, used to pick fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    /// Tile cell
    Tile,
    /// Grout cell
    Grout,
    /// Opening cell
    Opening,
}

impl CellKind {
    /// Value-free class of this cell
    pub const fn class(&self) -> CellClass {
        match self {
            Self::Tile { .. } => CellClass::Tile,
            Self::Grout { .. } => CellClass::Grout,
            Self::Opening => CellClass::Opening,
        }
    }

    /// Numeric contribution of the cell, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Tile { number } => Some(*number as f64),
            Self::Grout { area } => Some(*area),
            Self::Opening => None,
        }
    }
}

/// A classified cell addressed by 1-based (row, column)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Row band index
    pub row: usize,
    /// Column band index
    pub col: usize,
    /// Classification and value
    pub kind: CellKind,
}

/// Lazy, finite stream of classified cells in row-major order
///
/// Cloning a stream before it is consumed replays it from the start, so the
/// same classification can feed both a sink and the aggregator.
#[derive(Debug, Clone)]
pub struct CellStream<'a> {
    grid: &'a Grid,
    opening: Option<&'a Opening>,
    test: OpeningTest,
    row: usize,
    col: usize,
    tiles: usize,
}

impl CellStream<'_> {
    fn classify_current(&mut self) -> Option<CellKind> {
        let bounds = self.grid.cell_bounds(self.row, self.col)?;

        if let Some(opening) = self.opening {
            if self.test.contains(opening, &bounds) {
                return Some(CellKind::Opening);
            }
        }

        if self.row % 2 == 0 && self.col % 2 == 0 {
            self.tiles += 1;
            Some(CellKind::Tile {
                number: self.tiles,
            })
        } else {
            Some(CellKind::Grout {
                area: bounds.width() * bounds.height(),
            })
        }
    }

    fn remaining(&self) -> usize {
        let cols = self.grid.column_count();
        let rows = self.grid.row_count();
        if self.row > rows || cols == 0 {
            return 0;
        }
        (rows - self.row) * cols + (cols + 1 - self.col)
    }
}

impl Iterator for CellStream<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.row > self.grid.row_count() || self.grid.column_count() == 0 {
            return None;
        }

        let kind = self.classify_current()?;
        let cell = Cell {
            row: self.row,
            col: self.col,
            kind,
        };

        if self.col == self.grid.column_count() {
            self.col = 1;
            self.row += 1;
        } else {
            self.col += 1;
        }

        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellStream<'_> {}

impl FusedIterator for CellStream<'_> {}

/// Classify every cell using the trailing-corner opening test
pub const fn classify<'a>(grid: &'a Grid, opening: Option<&'a Opening>) -> CellStream<'a> {
    classify_with(grid, opening, OpeningTest::TrailingCorner)
}

/// Classify every cell using an explicit opening test
pub const fn classify_with<'a>(
    grid: &'a Grid,
    opening: Option<&'a Opening>,
    test: OpeningTest,
) -> CellStream<'a> {
    CellStream {
        grid,
        opening,
        test,
        row: 1,
        col: 1,
        tiles: 0,
    }
}
