use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::style::{Color, Style};
use ratatui::backend::{Backend as _, CrosstermBackend};
use ratatui::buffer::Cell;
use ratatui::style::Color as RColor;
use std::io;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Opaque terminal wrapper so the rest of the crate does not need to reference `ratatui` types.
///
/// Cells are written straight through `ratatui::backend::Backend::draw` instead of a
/// `Terminal` frame: widgets repaint only what changed and nothing else is touched.
pub struct TerminalBackend<W: io::Write> {
    inner: CrosstermBackend<W>,
}

impl TerminalBackend<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: io::Write> TerminalBackend<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: CrosstermBackend::new(writer),
        }
    }
}

impl<W: io::Write> Backend for TerminalBackend<W> {
    fn size(&self) -> io::Result<Size> {
        let size = self.inner.size()?;
        Ok(Size::new(size.width, size.height))
    }

    fn print(&mut self, pos: Pos, text: &str, style: Style) -> io::Result<()> {
        let fg = to_ratatui_color(style.fg);
        let bg = to_ratatui_color(style.bg);

        let mut cells = Vec::with_capacity(text.len());
        let mut x = pos.x;
        for g in text.graphemes(true) {
            let w = UnicodeWidthStr::width(g) as u16;
            if w == 0 {
                continue;
            }
            let mut cell = Cell::default();
            cell.set_symbol(g).set_fg(fg).set_bg(bg);
            cells.push((x, pos.y, cell));
            x = x.saturating_add(w);
        }

        self.inner
            .draw(cells.iter().map(|(x, y, cell)| (*x, *y, cell)))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.inner.clear()
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            self.inner.show_cursor()
        } else {
            self.inner.hide_cursor()
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        ratatui::backend::Backend::flush(&mut self.inner)
    }
}

fn to_ratatui_color(c: Option<Color>) -> RColor {
    match c {
        None | Some(Color::Reset) => RColor::Reset,
        Some(Color::Rgb(r, g, b)) => RColor::Rgb(r, g, b),
        Some(Color::Indexed(i)) => RColor::Indexed(i),
    }
}

// Backend-specific tests live under `tests/unit/ui/backend/test.rs` to avoid depending on a tty.
