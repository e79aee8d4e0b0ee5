//! PixeLink Core Library
//!
//! UI-framework-free data structures and logic for the PixeLink pixel editor:
//! the cell grid, the fixed 64-color palette, the undo history, the stroke
//! tools, and the editing session that ties them together.

pub mod export;
pub mod grid;
pub mod history;
pub mod palette;
pub mod session;
pub mod tools;

pub use export::{export_grid, ExportFormat};
pub use grid::{Cell, CellGrid, GridError, GridResult, GridSnapshot};
pub use history::HistoryStack;
pub use palette::Palette;
pub use session::EditorSession;
pub use tools::{apply_stroke, map_to_cell, CellCoord, ToolKind, ToolState};
