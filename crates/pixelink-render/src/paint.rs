//! The egui painter pass for the cell grid.

use egui::{Color32, Painter, Stroke};
use pixelink_core::{CellGrid, Palette};

use crate::layout::CanvasLayout;

/// Checkerboard backdrop shades, alternating by cell parity.
const CHECKER_EVEN: Color32 = Color32::from_gray(235);
const CHECKER_ODD: Color32 = Color32::from_gray(245);

/// Grid line color.
const GRID_LINE: Color32 = Color32::from_gray(200);

/// egui color for a palette index.
pub fn palette_color32(index: u8) -> Color32 {
    let [r, g, b] = Palette::rgb(index);
    Color32::from_rgb(r, g, b)
}

/// Draw the grid: checkerboard backdrop, colored cells on top, and grid
/// lines over everything when enabled.
pub fn paint_grid(painter: &Painter, layout: &CanvasLayout, grid: &CellGrid, grid_lines: bool) {
    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let shade = if (col + row) % 2 == 0 {
                CHECKER_EVEN
            } else {
                CHECKER_ODD
            };
            painter.rect_filled(layout.cell_rect(col, row), 0.0, shade);
        }
    }

    for (i, cell) in grid.cells().iter().enumerate() {
        if let Some(index) = cell {
            let col = i % grid.cols();
            let row = i / grid.cols();
            painter.rect_filled(layout.cell_rect(col, row), 0.0, palette_color32(*index));
        }
    }

    if grid_lines {
        let stroke = Stroke::new(1.0, GRID_LINE);
        let rect = layout.rect();
        for col in 0..=layout.cols {
            let x = layout.origin.x + col as f32 * layout.cell_size;
            painter.line_segment(
                [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
                stroke,
            );
        }
        for row in 0..=layout.rows {
            let y = layout.origin.y + row as f32 * layout.cell_size;
            painter.line_segment(
                [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
                stroke,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors_match_hex() {
        assert_eq!(palette_color32(0), Color32::from_rgb(0x00, 0x00, 0x00));
        assert_eq!(palette_color32(1), Color32::from_rgb(0xe0, 0x3c, 0x28));
        assert_eq!(palette_color32(61), Color32::from_rgb(0x0a, 0x89, 0xff));
    }
}
