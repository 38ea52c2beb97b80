//! Bounded, clipped character writes onto a [`Backend`].
//!
//! Coordinates are signed so callers can compute positions that fall off-screen while the
//! terminal is shrinking; such writes are dropped or clipped, never reported as errors.

use crate::core::text_window::truncate_to_width;
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::style::Style;
use std::io;

#[derive(Debug)]
pub struct Canvas<B: Backend> {
    backend: B,
    current: Style,
}

impl<B: Backend> Canvas<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: Style::default(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Live terminal size. Never cached between calls.
    pub fn size(&self) -> io::Result<Size> {
        self.backend.size()
    }

    /// The color pair that a write with `Style::default()` would use.
    pub fn current_style(&self) -> Style {
        self.current
    }

    /// Runs `f` with `style` patched over the current colors, then restores the previous
    /// colors whether `f` succeeded or not.
    pub fn with_style<R>(
        &mut self,
        style: Style,
        f: impl FnOnce(&mut Self) -> io::Result<R>,
    ) -> io::Result<R> {
        let saved = self.current;
        self.current = saved.patch(style);
        let result = f(self);
        self.current = saved;
        result
    }

    /// Writes `text` at column `x`, row `y`, clipped at the right edge.
    ///
    /// Rows outside `[0, height)` and negative columns are silently discarded.
    pub fn write_at(&mut self, x: i32, y: i32, text: &str, style: Style) -> io::Result<()> {
        let size = self.backend.size()?;
        if y < 0 || y >= i32::from(size.height) || x < 0 {
            return Ok(());
        }
        let x = x.max(0);
        if x >= i32::from(size.width) {
            return Ok(());
        }

        let available = (i32::from(size.width) - x) as usize;
        let text = &text[..truncate_to_width(text, available)];
        if text.is_empty() {
            return Ok(());
        }

        let pos = Pos::new(x as u16, y as u16);
        self.with_style(style, |canvas| {
            let style = canvas.current;
            canvas.backend.print(pos, text, style)
        })
    }

    /// Fills row `y` with `ch` across the full current width.
    pub fn fill_line(&mut self, y: i32, ch: char, style: Style) -> io::Result<()> {
        let width = self.backend.size()?.width as usize;
        let line: String = std::iter::repeat(ch).take(width).collect();
        self.write_at(0, y, &line, style)
    }

    /// Blanks `rect` with spaces in `style`. Rows are clipped like [`Canvas::write_at`].
    pub fn fill_rect(&mut self, rect: Rect, style: Style) -> io::Result<()> {
        if rect.is_empty() {
            return Ok(());
        }
        let blank = " ".repeat(rect.w as usize);
        for y in rect.y..rect.bottom() {
            self.write_at(i32::from(rect.x), i32::from(y), &blank, style)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> io::Result<()> {
        self.backend.clear()
    }

    pub fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.backend.set_cursor_visible(visible)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.backend.flush()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/canvas.rs"]
mod tests;
