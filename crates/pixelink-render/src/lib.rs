//! PixeLink Render Library
//!
//! Turns the core cell grid into pixels: canvas layout (cell sizing and
//! rectangle math) and the egui painter pass that draws the checkerboard
//! backdrop, the colored cells, and optional grid lines.

mod layout;
mod paint;

pub use layout::{cell_size_for, CanvasLayout, MAX_CANVAS_SIZE, MIN_CELL_SIZE};
pub use paint::{palette_color32, paint_grid};
