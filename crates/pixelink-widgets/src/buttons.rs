//! Tool toggle and action buttons.

use egui::{Button, Color32, Response, RichText, Ui};

use crate::{sizing, theme};

/// A toggle button for a tool; solid accent fill while selected.
pub fn toggle_button(ui: &mut Ui, label: &str, selected: bool) -> Response {
    let (fill, text) = if selected {
        (theme::ACCENT, Color32::WHITE)
    } else {
        (theme::BUTTON_BG, theme::TEXT)
    };
    ui.add(
        Button::new(RichText::new(label).color(text))
            .fill(fill)
            .corner_radius(sizing::CORNER_RADIUS),
    )
}

/// A plain action button (undo, clear, apply).
pub fn action_button(ui: &mut Ui, label: &str) -> Response {
    ui.add(
        Button::new(RichText::new(label).color(theme::TEXT))
            .fill(theme::BUTTON_BG)
            .corner_radius(sizing::CORNER_RADIUS),
    )
}
