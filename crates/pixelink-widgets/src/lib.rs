//! Reusable egui widget components for the PixeLink editor:
//!
//! - **Palette**: the 64-swatch color grid
//! - **Buttons**: tool toggles and action buttons

pub mod buttons;
pub mod palette;

pub use buttons::{action_button, toggle_button};
pub use palette::PaletteGrid;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Color swatch edge length
    pub const SWATCH: f32 = 20.0;
    /// Gap between swatches
    pub const SWATCH_GAP: f32 = 2.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Idle button background
    pub const BUTTON_BG: Color32 = Color32::from_rgb(245, 245, 245);
}
