//! TUI integration layer (crossterm).
//!
//! Kept apart from `ui`/`app` so everything above it can run against the headless backend.

pub mod crossterm;
pub mod terminal_guard;
