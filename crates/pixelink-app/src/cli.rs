//! Command-line options.

use clap::{Parser, ValueEnum};
use pixelink_core::ExportFormat;

/// PixeLink: a pixel-art grid editor.
#[derive(Debug, Parser)]
#[command(name = "pixelink", version, about)]
pub struct Cli {
    /// Grid columns at startup.
    #[arg(long, default_value_t = 16)]
    pub cols: usize,

    /// Grid rows at startup.
    #[arg(long, default_value_t = 16)]
    pub rows: usize,

    /// Shape of the grid dump logged after each gesture.
    #[arg(long, value_enum, default_value = "keyed")]
    pub export_format: ExportArg,

    /// Draw grid lines over the canvas.
    #[arg(long)]
    pub grid_lines: bool,
}

/// CLI-facing mirror of [`ExportFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportArg {
    Flat,
    Grid,
    Keyed,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Flat => ExportFormat::Flat,
            ExportArg::Grid => ExportFormat::Grid,
            ExportArg::Keyed => ExportFormat::Keyed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pixelink"]).unwrap();
        assert_eq!(cli.cols, 16);
        assert_eq!(cli.rows, 16);
        assert_eq!(cli.export_format, ExportArg::Keyed);
        assert!(!cli.grid_lines);
    }

    #[test]
    fn test_export_format_values() {
        let cli =
            Cli::try_parse_from(["pixelink", "--export-format", "flat", "--cols", "8"]).unwrap();
        assert_eq!(cli.cols, 8);
        assert_eq!(ExportFormat::from(cli.export_format), ExportFormat::Flat);
    }
}
