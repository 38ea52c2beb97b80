//! UI layer: canvas, widgets and the backends they render onto.
//!
//! All `ratatui` types stay behind the backend adapter.

pub mod core;

pub mod backend;

pub mod widgets;
