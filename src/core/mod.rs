//! Core types shared by the UI and the terminal integration:
//! - Command: semantic commands
//! - Event: backend-neutral keys
//! - Config: fixed startup configuration

pub mod command;
pub mod config;
pub mod event;
pub mod text_window;

pub use command::{Command, MenuKey};
pub use config::UiConfig;
pub use event::{Key, KeyCode, KeyModifiers};
