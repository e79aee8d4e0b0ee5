//! Main application entry point.

use clap::Parser;
use pixelink_app::{Cli, PixelinkApp};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Starting PixeLink");

    let cli = Cli::parse();
    let app = PixelinkApp::new(&cli)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PixeLink")
            .with_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native("pixelink", options, Box::new(move |_cc| Ok(Box::new(app))))?;
    Ok(())
}
