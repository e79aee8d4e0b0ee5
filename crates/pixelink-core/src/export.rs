//! Grid export for the logging collaborator.
//!
//! Cells leave the core as hex strings here; everywhere else they are
//! palette indices.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::grid::{Cell, CellGrid};
use crate::palette::Palette;

/// Shape of the exported grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Row-major array of hex-or-null.
    Flat,
    /// Array of row arrays.
    Grid,
    /// Object keyed by `"row-col"`.
    #[default]
    Keyed,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Flat => "flat",
            ExportFormat::Grid => "grid",
            ExportFormat::Keyed => "keyed",
        }
    }
}

fn cell_value(cell: Cell) -> Value {
    match cell {
        Some(index) => Value::String(Palette::hex(index).to_string()),
        None => Value::Null,
    }
}

/// Render the grid contents in the requested shape.
pub fn export_grid(grid: &CellGrid, format: ExportFormat) -> Value {
    match format {
        ExportFormat::Flat => Value::Array(grid.cells().iter().map(|c| cell_value(*c)).collect()),
        ExportFormat::Grid => Value::Array(
            grid.cells()
                .chunks(grid.cols())
                .map(|row| Value::Array(row.iter().map(|c| cell_value(*c)).collect()))
                .collect(),
        ),
        ExportFormat::Keyed => {
            let mut map = Map::with_capacity(grid.len());
            for row in 0..grid.rows() {
                for col in 0..grid.cols() {
                    let cell = grid.get(col, row).unwrap_or(None);
                    map.insert(format!("{row}-{col}"), cell_value(cell));
                }
            }
            Value::Object(map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_grid() -> CellGrid {
        let mut grid = CellGrid::new(2, 2).unwrap();
        grid.set(1, 0, Some(0)); // #000000
        grid.set(0, 1, Some(2)); // #ffffff
        grid
    }

    #[test]
    fn test_flat_export() {
        let value = export_grid(&sample_grid(), ExportFormat::Flat);
        assert_eq!(value, json!([null, "#000000", "#ffffff", null]));
    }

    #[test]
    fn test_grid_export() {
        let value = export_grid(&sample_grid(), ExportFormat::Grid);
        assert_eq!(value, json!([[null, "#000000"], ["#ffffff", null]]));
    }

    #[test]
    fn test_keyed_export() {
        let value = export_grid(&sample_grid(), ExportFormat::Keyed);
        assert_eq!(
            value,
            json!({
                "0-0": null,
                "0-1": "#000000",
                "1-0": "#ffffff",
                "1-1": null,
            })
        );
    }

    #[test]
    fn test_format_names() {
        assert_eq!(ExportFormat::Flat.as_str(), "flat");
        assert_eq!(ExportFormat::Grid.as_str(), "grid");
        assert_eq!(ExportFormat::Keyed.as_str(), "keyed");
        assert_eq!(ExportFormat::default(), ExportFormat::Keyed);
    }
}
