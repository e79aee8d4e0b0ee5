//! The 64-swatch color palette grid.

use egui::{vec2, CursorIcon, Sense, Stroke, StrokeKind, Ui};
use pixelink_core::Palette;

use crate::{sizing, theme};

/// A clickable grid of the fixed palette.
///
/// Shows every palette entry as a swatch, outlines the selected one, and
/// reports a click as the new selection. The caller owns the selection
/// state (it lives in the session's tool state).
pub struct PaletteGrid {
    selected: u8,
    columns: usize,
}

impl PaletteGrid {
    /// Palette grid with the default 8-wide layout.
    pub fn new(selected: u8) -> Self {
        Self {
            selected,
            columns: 8,
        }
    }

    /// Override the number of swatches per row.
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Draw the grid; returns the clicked palette index, if any.
    pub fn show(self, ui: &mut Ui) -> Option<u8> {
        ui.scope(|ui| {
            let mut clicked = None;
            ui.spacing_mut().item_spacing = vec2(sizing::SWATCH_GAP, sizing::SWATCH_GAP);
            for row_start in (0..Palette::LEN).step_by(self.columns) {
                ui.horizontal(|ui| {
                    for index in row_start..(row_start + self.columns).min(Palette::LEN) {
                        let index = index as u8;
                        if self.swatch(ui, index) {
                            clicked = Some(index);
                        }
                    }
                });
            }
            clicked
        })
        .inner
    }

    /// One swatch; true when clicked.
    fn swatch(&self, ui: &mut Ui, index: u8) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(vec2(sizing::SWATCH, sizing::SWATCH), Sense::click());

        if ui.is_rect_visible(rect) {
            let [r, g, b] = Palette::rgb(index);
            let fill = egui::Color32::from_rgb(r, g, b);
            let stroke = if index == self.selected {
                Stroke::new(2.0, theme::ACCENT)
            } else {
                Stroke::new(1.0, theme::BORDER)
            };
            let painter = ui.painter();
            painter.rect_filled(rect, 2.0, fill);
            painter.rect_stroke(rect, 2.0, stroke, StrokeKind::Inside);
        }

        response
            .on_hover_text(Palette::hex(index))
            .on_hover_cursor(CursorIcon::PointingHand)
            .clicked()
    }
}
