//! The editing session: grid, history, and tool state under one owner.

use crate::grid::{CellGrid, GridResult};
use crate::history::HistoryStack;
use crate::palette::Palette;
use crate::tools::{apply_stroke, CellCoord, ToolKind, ToolState};

/// Owns the canvas state and enforces the gesture protocol.
///
/// A gesture (pointer-down through pointer-up) is the unit of undo: exactly
/// one snapshot is pushed when it begins, and every stroke inside it shares
/// that undo step. Collaborators hold a reference to the session instead of
/// reaching into ambient globals.
#[derive(Debug, Clone)]
pub struct EditorSession {
    grid: CellGrid,
    history: HistoryStack,
    tool: ToolState,
    gesture_active: bool,
    /// Whether any stroke has landed in the active gesture.
    stroked: bool,
}

impl EditorSession {
    /// Create a session with an empty grid of the given dimensions.
    pub fn new(cols: usize, rows: usize) -> GridResult<Self> {
        Ok(Self {
            grid: CellGrid::new(cols, rows)?,
            history: HistoryStack::new(),
            tool: ToolState::default(),
            gesture_active: false,
            stroked: false,
        })
    }

    /// The canvas grid, for rendering and export.
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// The current tool state.
    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    /// Number of undo steps available.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// True while a drag gesture is in progress.
    pub fn gesture_active(&self) -> bool {
        self.gesture_active
    }

    /// Switch the active tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool.current_tool = tool;
    }

    /// Select a palette color and switch to the pen, as the palette UI does.
    pub fn set_color(&mut self, index: u8) {
        if !Palette::contains(index) {
            log::error!("ignoring selection of unknown palette index {index}");
            return;
        }
        self.tool.current_color = index;
        self.tool.current_tool = ToolKind::Pen;
    }

    /// Start a drag gesture, pushing the one snapshot that covers it.
    ///
    /// Gestures never overlap; a second begin while one is active is a
    /// caller bug and is ignored.
    pub fn begin_gesture(&mut self) {
        if self.gesture_active {
            log::warn!("begin_gesture while a gesture is active; ignoring");
            return;
        }
        self.history.push(self.grid.snapshot());
        self.gesture_active = true;
        self.stroked = false;
    }

    /// Apply one pointer sample within the active gesture.
    ///
    /// `constrain` is the line-constraint modifier (shift). Samples outside
    /// a gesture are dropped so no mutation can bypass the undo snapshot.
    pub fn paint(&mut self, target: CellCoord, constrain: bool) {
        if !self.gesture_active {
            log::warn!("paint outside a gesture; ignoring");
            return;
        }
        let first_sample = !self.stroked;
        apply_stroke(&mut self.grid, &mut self.tool, target, constrain, first_sample);
        self.stroked = true;
    }

    /// Finish the gesture: forget the line anchor so the next gesture
    /// starts unconstrained.
    pub fn end_gesture(&mut self) {
        self.tool.last_cell = None;
        self.gesture_active = false;
        self.stroked = false;
    }

    /// Undo the most recent gesture. Returns false when there is nothing
    /// to undo. An in-progress gesture is ended first.
    pub fn undo(&mut self) -> bool {
        if self.gesture_active {
            self.end_gesture();
        }
        match self.history.pop() {
            Some(snapshot) => {
                self.grid.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    /// Resize the grid, discarding contents and all history.
    ///
    /// A resize cannot happen inside a gesture; any in-progress gesture is
    /// ended first. On error nothing changes.
    pub fn resize(&mut self, cols: usize, rows: usize) -> GridResult<()> {
        if self.gesture_active {
            log::warn!("resize during an active gesture; ending the gesture");
            self.end_gesture();
        }
        self.grid.resize(cols, rows)?;
        self.history.clear();
        Ok(())
    }

    /// Clear every cell, as a single undoable step.
    pub fn clear_canvas(&mut self) {
        if self.gesture_active {
            self.end_gesture();
        }
        self.history.push(self.grid.snapshot());
        self.grid.clear();
    }

    /// Eyedropper: read a cell and, if it is colored, adopt that color and
    /// switch to the pen. Empty cells change nothing.
    pub fn pick_color(&mut self, cell: CellCoord) -> Option<u8> {
        let picked = self.grid.get(cell.col, cell.row).ok().flatten()?;
        self.tool.current_color = picked;
        self.tool.current_tool = ToolKind::Pen;
        Some(picked)
    }
}
