//! Undo history for the cell grid.

use crate::grid::GridSnapshot;

/// A stack of grid snapshots.
///
/// Callers snapshot the current grid *before* mutating it, so popping
/// always yields the state that preceded the most recent change. There is
/// no redo stack: an undone state is gone unless independently re-pushed.
/// Depth is unbounded; the stack is cleared whenever the grid is resized.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    snapshots: Vec<GridSnapshot>,
}

impl HistoryStack {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot taken before the mutation it protects.
    pub fn push(&mut self, snapshot: GridSnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Remove and return the most recent snapshot.
    ///
    /// `None` means there is nothing to undo; callers treat that as a
    /// silent no-op, not an error.
    pub fn pop(&mut self) -> Option<GridSnapshot> {
        self.snapshots.pop()
    }

    /// Discard all snapshots (invoked on resize/reinit).
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellGrid;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut grid = CellGrid::new(2, 2).unwrap();
        let mut history = HistoryStack::new();

        history.push(grid.snapshot());
        grid.set(0, 0, Some(1));
        history.push(grid.snapshot());

        assert_eq!(history.len(), 2);
        let top = history.pop().unwrap();
        assert_eq!(top, grid.snapshot());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_pop_empty_is_none() {
        let mut history = HistoryStack::new();
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_clear_discards_everything() {
        let grid = CellGrid::new(2, 2).unwrap();
        let mut history = HistoryStack::new();
        history.push(grid.snapshot());
        history.push(grid.snapshot());
        history.clear();
        assert!(history.is_empty());
    }
}
