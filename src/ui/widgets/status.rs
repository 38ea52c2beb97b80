use crate::core::text_window::fit_to_width;
use crate::ui::backend::Backend;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::style::Style;
use std::io;

/// Operator feedback line pinned to the bottom row.
///
/// Unlike [`super::Label`] it has no stored geometry: row and width come from the live
/// terminal size on every draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBar {
    pub message: String,
    pub style: Style,
}

impl StatusBar {
    pub fn new(message: impl Into<String>, style: Style) -> Self {
        Self {
            message: message.into(),
            style,
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn draw<B: Backend>(&self, canvas: &mut Canvas<B>) -> io::Result<()> {
        let size = canvas.size()?;
        if size.height == 0 {
            return Ok(());
        }
        let text = fit_to_width(&self.message, size.width as usize);
        canvas.write_at(0, i32::from(size.height) - 1, &text, self.style)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/status.rs"]
mod tests;
