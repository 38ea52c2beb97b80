use crate::core::text_window::fit_to_width;
use crate::ui::backend::Backend;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::style::Style;
use std::io;

/// Single-line text with a fixed display width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub text: String,
    pub style: Style,
}

impl Label {
    pub fn new(x: i32, y: i32, width: u16, text: impl Into<String>, style: Style) -> Self {
        Self {
            x,
            y,
            width,
            text: text.into(),
            style,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    // Always writes exactly `width` cells: frames are not diffed, so a shorter
    // text has to overwrite whatever the previous one left behind.
    pub fn draw<B: Backend>(&self, canvas: &mut Canvas<B>) -> io::Result<()> {
        let text = fit_to_width(&self.text, self.width as usize);
        canvas.write_at(self.x, self.y, &text, self.style)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/label.rs"]
mod tests;
