//! Stroke tools: pen, eraser, and shift-constrained line drawing.

use serde::{Deserialize, Serialize};

use crate::grid::{Cell, CellGrid};

/// Available drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Pen,
    Eraser,
}

/// A cell position, `(column, row)` from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCoord {
    pub col: usize,
    pub row: usize,
}

impl CellCoord {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Current tool, current color, and the cell painted by the previous sample
/// of the active drag gesture.
///
/// `last_cell` exists only to anchor shift-constrained lines; it is cleared
/// when the gesture ends so the next gesture starts unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolState {
    pub current_tool: ToolKind,
    /// Palette index of the active color.
    pub current_color: u8,
    pub last_cell: Option<CellCoord>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            current_tool: ToolKind::Pen,
            current_color: 0,
            last_cell: None,
        }
    }
}

impl ToolState {
    /// The cell value a stroke writes: empty for the eraser, the current
    /// color otherwise.
    pub fn ink(&self) -> Cell {
        match self.current_tool {
            ToolKind::Pen => Some(self.current_color),
            ToolKind::Eraser => None,
        }
    }
}

/// Map a pixel position on the canvas to a cell coordinate.
///
/// Each axis is clamped to `[0, canvas_dim - 1]` before the division, so
/// the result is in bounds even for pointer samples on the canvas edge.
pub fn map_to_cell(px: f32, py: f32, cell_size: f32, canvas_w: f32, canvas_h: f32) -> CellCoord {
    let col = (px.clamp(0.0, canvas_w - 1.0) / cell_size).floor() as usize;
    let row = (py.clamp(0.0, canvas_h - 1.0) / cell_size).floor() as usize;
    CellCoord::new(col, row)
}

/// Apply one pointer sample to the grid.
///
/// Writes a single cell, unless the constraint modifier is held, a previous
/// cell exists, and this is not the first sample of the gesture — then an
/// axis-aligned run is filled:
/// - same column: every cell between the two rows, inclusive;
/// - same row: every cell between the two columns, inclusive;
/// - neither (a diagonal move): just the target cell, no line.
///
/// `last_cell` is updated to `target` afterwards.
pub fn apply_stroke(
    grid: &mut CellGrid,
    state: &mut ToolState,
    target: CellCoord,
    constrain: bool,
    first_sample: bool,
) {
    let ink = state.ink();
    match state.last_cell {
        Some(last) if constrain && !first_sample => {
            if last.col == target.col {
                let (lo, hi) = (last.row.min(target.row), last.row.max(target.row));
                for row in lo..=hi {
                    grid.set(target.col, row, ink);
                }
            } else if last.row == target.row {
                let (lo, hi) = (last.col.min(target.col), last.col.max(target.col));
                for col in lo..=hi {
                    grid.set(col, target.row, ink);
                }
            } else {
                grid.set(target.col, target.row, ink);
            }
        }
        _ => grid.set(target.col, target.row, ink),
    }
    state.last_cell = Some(target);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid5() -> CellGrid {
        CellGrid::new(5, 5).unwrap()
    }

    fn pen_at(last: Option<CellCoord>) -> ToolState {
        ToolState {
            current_tool: ToolKind::Pen,
            current_color: 3,
            last_cell: last,
        }
    }

    #[test]
    fn test_single_cell_stroke() {
        let mut grid = grid5();
        let mut state = pen_at(None);
        apply_stroke(&mut grid, &mut state, CellCoord::new(1, 2), false, true);
        assert_eq!(grid.get(1, 2).unwrap(), Some(3));
        assert_eq!(state.last_cell, Some(CellCoord::new(1, 2)));
    }

    #[test]
    fn test_vertical_constrained_run() {
        let mut grid = grid5();
        let mut state = pen_at(Some(CellCoord::new(2, 2)));
        apply_stroke(&mut grid, &mut state, CellCoord::new(2, 4), true, false);

        assert_eq!(grid.get(2, 2).unwrap(), Some(3));
        assert_eq!(grid.get(2, 3).unwrap(), Some(3));
        assert_eq!(grid.get(2, 4).unwrap(), Some(3));
        // Everything outside the run is untouched.
        let painted = grid.cells().iter().filter(|c| c.is_some()).count();
        assert_eq!(painted, 3);
    }

    #[test]
    fn test_horizontal_constrained_run() {
        let mut grid = grid5();
        let mut state = pen_at(Some(CellCoord::new(4, 1)));
        apply_stroke(&mut grid, &mut state, CellCoord::new(0, 1), true, false);

        for col in 0..=4 {
            assert_eq!(grid.get(col, 1).unwrap(), Some(3));
        }
        let painted = grid.cells().iter().filter(|c| c.is_some()).count();
        assert_eq!(painted, 5);
    }

    #[test]
    fn test_diagonal_paints_single_cell() {
        let mut grid = grid5();
        let mut state = pen_at(Some(CellCoord::new(2, 2)));
        apply_stroke(&mut grid, &mut state, CellCoord::new(4, 4), true, false);

        assert_eq!(grid.get(4, 4).unwrap(), Some(3));
        assert_eq!(grid.get(3, 3).unwrap(), None);
        assert_eq!(grid.get(2, 2).unwrap(), None);
    }

    #[test]
    fn test_no_constraint_without_modifier() {
        let mut grid = grid5();
        let mut state = pen_at(Some(CellCoord::new(2, 0)));
        apply_stroke(&mut grid, &mut state, CellCoord::new(2, 3), false, false);

        assert_eq!(grid.get(2, 3).unwrap(), Some(3));
        assert_eq!(grid.get(2, 1).unwrap(), None);
    }

    #[test]
    fn test_first_sample_ignores_constraint() {
        let mut grid = grid5();
        let mut state = pen_at(Some(CellCoord::new(2, 0)));
        apply_stroke(&mut grid, &mut state, CellCoord::new(2, 3), true, true);

        assert_eq!(grid.get(2, 3).unwrap(), Some(3));
        assert_eq!(grid.get(2, 1).unwrap(), None);
    }

    #[test]
    fn test_eraser_writes_empty() {
        let mut grid = grid5();
        grid.set(1, 1, Some(9));
        let mut state = ToolState {
            current_tool: ToolKind::Eraser,
            ..ToolState::default()
        };
        apply_stroke(&mut grid, &mut state, CellCoord::new(1, 1), false, true);
        assert_eq!(grid.get(1, 1).unwrap(), None);
    }

    #[test]
    fn test_map_to_cell_clamps_to_edge() {
        // 5x5 grid of 16px cells: 80x80 canvas.
        let cell = map_to_cell(200.0, -30.0, 16.0, 80.0, 80.0);
        assert_eq!(cell, CellCoord::new(4, 0));

        let cell = map_to_cell(79.9, 79.9, 16.0, 80.0, 80.0);
        assert_eq!(cell, CellCoord::new(4, 4));
    }

    #[test]
    fn test_map_to_cell_interior() {
        assert_eq!(map_to_cell(0.0, 0.0, 16.0, 80.0, 80.0), CellCoord::new(0, 0));
        assert_eq!(map_to_cell(33.0, 17.0, 16.0, 80.0, 80.0), CellCoord::new(2, 1));
    }
}
