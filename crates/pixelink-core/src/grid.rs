//! Cell grid storage for the pixel canvas.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::palette::Palette;

/// One cell of the canvas: `None` is empty, `Some(i)` indexes the palette.
pub type Cell = Option<u8>;

/// Grid errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions: {cols}x{rows}")]
    InvalidDimension { cols: usize, rows: usize },
    #[error("cell ({col}, {row}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
    #[error("cell color {index} is not a palette entry")]
    InvalidColor { index: u8 },
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// A deep copy of the grid contents at a point in time, used for undo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

/// The pixel canvas: a row-major grid of palette-indexed cells.
///
/// The length of `cells` always equals `cols * rows`, and both dimensions
/// are positive. Reads are bounds-checked; writes outside the grid are a
/// programming error and are logged and dropped rather than surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct CellGrid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

/// Untrusted grid shape used to re-validate the length invariant on
/// deserialization.
#[derive(Deserialize)]
struct RawGrid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawGrid> for CellGrid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> GridResult<Self> {
        let mut grid = CellGrid::new(raw.cols, raw.rows)?;
        if raw.cells.len() != grid.cells.len() {
            return Err(GridError::InvalidDimension {
                cols: raw.cols,
                rows: raw.rows,
            });
        }
        if let Some(&index) = raw.cells.iter().flatten().find(|&&i| !Palette::contains(i)) {
            return Err(GridError::InvalidColor { index });
        }
        grid.cells = raw.cells;
        Ok(grid)
    }
}

impl CellGrid {
    /// Create an empty grid of the given dimensions.
    pub fn new(cols: usize, rows: usize) -> GridResult<Self> {
        let len = Self::checked_len(cols, rows)?;
        Ok(Self {
            cols,
            rows,
            cells: vec![None; len],
        })
    }

    /// Reallocate to `cols * rows` empty cells.
    ///
    /// On error the existing grid is left untouched. Clearing the undo
    /// history on resize is the session's responsibility, not the grid's.
    pub fn resize(&mut self, cols: usize, rows: usize) -> GridResult<()> {
        let len = Self::checked_len(cols, rows)?;
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![None; len];
        Ok(())
    }

    fn checked_len(cols: usize, rows: usize) -> GridResult<usize> {
        if cols == 0 || rows == 0 {
            return Err(GridError::InvalidDimension { cols, rows });
        }
        cols.checked_mul(rows)
            .ok_or(GridError::InvalidDimension { cols, rows })
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells (`cols * rows`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// The raw row-major cell sequence.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, col: usize, row: usize) -> GridResult<usize> {
        if col >= self.cols || row >= self.rows {
            return Err(GridError::OutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Read one cell.
    ///
    /// Callers on the pointer path clamp coordinates before mapping them to
    /// cells, so `OutOfBounds` never fires there.
    pub fn get(&self, col: usize, row: usize) -> GridResult<Cell> {
        Ok(self.cells[self.index(col, row)?])
    }

    /// Overwrite one cell.
    ///
    /// An out-of-range write never reaches here from clamped pointer input,
    /// so it is logged as a bug and dropped instead of ending the session.
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) {
        match self.index(col, row) {
            Ok(i) => self.cells[i] = cell,
            Err(e) => log::error!("ignoring out-of-bounds write: {e}"),
        }
    }

    /// Set every cell to empty without changing dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Deep-copy the current contents.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            cols: self.cols,
            rows: self.rows,
            cells: self.cells.clone(),
        }
    }

    /// Restore a previously taken snapshot, dimensions included.
    pub fn restore(&mut self, snapshot: &GridSnapshot) {
        self.cols = snapshot.cols;
        self.rows = snapshot.rows;
        self.cells = snapshot.cells.clone();
    }
}
