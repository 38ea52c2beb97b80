use crate::ui::backend::Backend;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::style::Style;
use std::io;
use unicode_width::UnicodeWidthStr;

/// A bordered, blank-filled box with an optional centered title. Purely decorative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    pub x: i32,
    pub y: i32,
    pub w: u16,
    pub h: u16,
    pub title: Option<String>,
    pub style: Style,
}

impl Panel {
    pub fn new(x: i32, y: i32, w: u16, h: u16, style: Style) -> Self {
        Self {
            x,
            y,
            w,
            h,
            title: None,
            style,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn draw<B: Backend>(&self, canvas: &mut Canvas<B>) -> io::Result<()> {
        if self.w < 2 || self.h < 2 {
            return Ok(());
        }

        let inner = self.w as usize - 2;
        let top = format!("┌{}┐", "─".repeat(inner));
        let mid = format!("│{}│", " ".repeat(inner));
        let bot = format!("└{}┘", "─".repeat(inner));

        canvas.with_style(self.style, |canvas| {
            canvas.write_at(self.x, self.y, &top, Style::default())?;
            for row in 1..i32::from(self.h) - 1 {
                canvas.write_at(self.x, self.y + row, &mid, Style::default())?;
            }
            canvas.write_at(self.x, self.y + i32::from(self.h) - 1, &bot, Style::default())?;

            if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
                let t = format!(" {title} ");
                let offset = ((i32::from(self.w) - t.width() as i32) / 2).max(1);
                canvas.write_at(self.x + offset, self.y, &t, Style::default())?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/panel.rs"]
mod tests;
