//! Rendering backends.
//!
//! The trait keeps the rest of the codebase away from `ratatui`/`crossterm` types and lets
//! widgets render into a headless grid under test.

use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::style::Style;
use std::io;

pub trait Backend {
    /// Current terminal dimensions. Queried live, never cached.
    fn size(&self) -> io::Result<Size>;

    /// Writes `text` starting at `pos`. Callers are expected to have clipped `text` already.
    fn print(&mut self, pos: Pos, text: &str, style: Style) -> io::Result<()>;

    fn clear(&mut self) -> io::Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

// The concrete terminal backend lives in `ratatui.rs`, but we keep the module name generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
