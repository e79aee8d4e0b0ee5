//! Canvas layout: where each cell lands on screen.

use egui::{Pos2, Rect, Vec2};
use pixelink_core::{map_to_cell, CellCoord};

/// Largest canvas edge in pixels, regardless of available space.
pub const MAX_CANVAS_SIZE: f32 = 360.0;

/// Cells never shrink below this, even for large grids in small windows.
pub const MIN_CELL_SIZE: f32 = 4.0;

/// Cell pixel size that fits a `cols` x `rows` grid into the available
/// space: `floor(min(MAX_CANVAS_SIZE, available) / max(cols, rows))`,
/// floored at [`MIN_CELL_SIZE`].
pub fn cell_size_for(available: f32, cols: usize, rows: usize) -> f32 {
    let edge = MAX_CANVAS_SIZE.min(available);
    let cells = cols.max(rows).max(1) as f32;
    (edge / cells).floor().max(MIN_CELL_SIZE)
}

/// A positioned grid: origin, cell size, and dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    pub origin: Pos2,
    pub cell_size: f32,
    pub cols: usize,
    pub rows: usize,
}

impl CanvasLayout {
    pub fn new(origin: Pos2, cell_size: f32, cols: usize, rows: usize) -> Self {
        Self {
            origin,
            cell_size,
            cols,
            rows,
        }
    }

    /// Canvas size in pixels.
    pub fn size(&self) -> Vec2 {
        Vec2::new(
            self.cell_size * self.cols as f32,
            self.cell_size * self.rows as f32,
        )
    }

    /// The whole canvas rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size())
    }

    /// Screen rectangle of one cell.
    pub fn cell_rect(&self, col: usize, row: usize) -> Rect {
        let min = self.origin
            + Vec2::new(col as f32 * self.cell_size, row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// The cell under a screen position, clamped to the grid so edge and
    /// slightly-outside pointer samples still resolve to a valid cell.
    pub fn cell_at(&self, pos: Pos2) -> CellCoord {
        let local = pos - self.origin;
        let size = self.size();
        map_to_cell(local.x, local.y, self.cell_size, size.x, size.y)
    }
}
