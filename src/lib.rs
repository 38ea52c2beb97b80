//! cellmenu - a character-cell menu UI
//!
//! Module layout:
//! - core: commands, keys, text fitting, fixed configuration
//! - ui: canvas, widgets and rendering backends
//! - app: layout and the interaction loop
//! - tui: crossterm terminal setup and key reading
//! - logging: file-backed tracing

pub mod app;
pub mod core;
pub mod logging;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
