//! PixeLink Application
//!
//! The application shell: window, panels, and the wiring that turns
//! pointer and keyboard input into session operations.

mod app;
mod cli;

pub use app::PixelinkApp;
pub use cli::Cli;
