//! The eframe application: panels, canvas, and input wiring.

use egui::{vec2, ComboBox, DragValue, Key, KeyboardShortcut, Modifiers, PointerButton, Sense, Ui};
use pixelink_core::{export_grid, EditorSession, ExportFormat, GridError, ToolKind};
use pixelink_render::{cell_size_for, paint_grid, CanvasLayout};
use pixelink_widgets::{action_button, toggle_button, PaletteGrid};

use crate::cli::Cli;

/// Largest grid edge offered by the resize control.
const MAX_GRID_EDGE: usize = 64;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

/// The editor window: an [`EditorSession`] plus presentation settings.
pub struct PixelinkApp {
    session: EditorSession,
    export_format: ExportFormat,
    grid_lines: bool,
    /// Dimensions staged in the resize control, applied on demand.
    pending_cols: usize,
    pending_rows: usize,
}

impl PixelinkApp {
    /// Build the app from CLI options; fails if the requested grid
    /// dimensions are invalid.
    pub fn new(cli: &Cli) -> Result<Self, GridError> {
        Ok(Self {
            session: EditorSession::new(cli.cols, cli.rows)?,
            export_format: cli.export_format.into(),
            grid_lines: cli.grid_lines,
            pending_cols: cli.cols,
            pending_rows: cli.rows,
        })
    }

    /// Dump the grid to the log in the configured shape.
    fn log_export(&self) {
        let value = export_grid(self.session.grid(), self.export_format);
        log::info!(
            target: "pixelink::export",
            "grid ({}): {value}",
            self.export_format.as_str()
        );
    }

    fn controls(&mut self, ui: &mut Ui) {
        ui.add_space(4.0);
        ui.label("Palette");
        if let Some(index) = PaletteGrid::new(self.session.tool().current_color).show(ui) {
            self.session.set_color(index);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let tool = self.session.tool().current_tool;
            if toggle_button(ui, "Pen", tool == ToolKind::Pen).clicked() {
                self.session.set_tool(ToolKind::Pen);
            }
            if toggle_button(ui, "Eraser", tool == ToolKind::Eraser).clicked() {
                self.session.set_tool(ToolKind::Eraser);
            }
        });

        ui.horizontal(|ui| {
            if action_button(ui, "Undo").clicked() {
                self.session.undo();
                self.log_export();
            }
            if action_button(ui, "Clear").clicked() {
                self.session.clear_canvas();
                self.log_export();
            }
        });

        ui.add_space(8.0);
        // Resizing mid-gesture is guarded at the session level too, but the
        // control is simply unavailable while painting.
        ui.add_enabled_ui(!self.session.gesture_active(), |ui| {
            ui.horizontal(|ui| {
                ui.add(DragValue::new(&mut self.pending_cols).range(1..=MAX_GRID_EDGE));
                ui.label("x");
                ui.add(DragValue::new(&mut self.pending_rows).range(1..=MAX_GRID_EDGE));
                if action_button(ui, "Resize").clicked() {
                    match self.session.resize(self.pending_cols, self.pending_rows) {
                        Ok(()) => self.log_export(),
                        Err(e) => log::error!("resize rejected: {e}"),
                    }
                }
            });
        });

        ui.add_space(8.0);
        ComboBox::from_label("Export")
            .selected_text(self.export_format.as_str())
            .show_ui(ui, |ui| {
                for format in [ExportFormat::Flat, ExportFormat::Grid, ExportFormat::Keyed] {
                    ui.selectable_value(&mut self.export_format, format, format.as_str());
                }
            });
        ui.checkbox(&mut self.grid_lines, "Grid lines");
    }

    fn canvas(&mut self, ui: &mut Ui) {
        let (cols, rows) = (self.session.grid().cols(), self.session.grid().rows());
        let available = ui.available_size().min_elem();
        let cell_size = cell_size_for(available, cols, rows);
        let size = vec2(cell_size * cols as f32, cell_size * rows as f32);

        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        let layout = CanvasLayout::new(rect.min, cell_size, cols, rows);

        // Gesture bracket: primary button held over the canvas paints every
        // frame (idempotent per cell); release ends the gesture and logs.
        let painting = response.is_pointer_button_down_on()
            && ui.input(|i| i.pointer.button_down(PointerButton::Primary));
        if painting {
            if !self.session.gesture_active() {
                self.session.begin_gesture();
            }
            if let Some(pos) = response.interact_pointer_pos() {
                let constrain = ui.input(|i| i.modifiers.shift);
                self.session.paint(layout.cell_at(pos), constrain);
            }
        } else if self.session.gesture_active() {
            self.session.end_gesture();
            self.log_export();
        }

        // Secondary click is the eyedropper.
        if response.secondary_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.session.pick_color(layout.cell_at(pos));
            }
        }

        paint_grid(ui.painter(), &layout, self.session.grid(), self.grid_lines);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.session.undo();
            self.log_export();
        }
    }
}

impl eframe::App for PixelinkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| self.controls(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui));
    }
}
