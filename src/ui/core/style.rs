#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Reset,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

// The 16-color ANSI palette, named after the classic console colors.
impl Color {
    pub const BLACK: Self = Self::Indexed(0);
    pub const DARK_RED: Self = Self::Indexed(1);
    pub const DARK_GREEN: Self = Self::Indexed(2);
    pub const DARK_YELLOW: Self = Self::Indexed(3);
    pub const DARK_BLUE: Self = Self::Indexed(4);
    pub const DARK_MAGENTA: Self = Self::Indexed(5);
    pub const DARK_CYAN: Self = Self::Indexed(6);
    pub const GRAY: Self = Self::Indexed(7);
    pub const DARK_GRAY: Self = Self::Indexed(8);
    pub const RED: Self = Self::Indexed(9);
    pub const GREEN: Self = Self::Indexed(10);
    pub const YELLOW: Self = Self::Indexed(11);
    pub const BLUE: Self = Self::Indexed(12);
    pub const MAGENTA: Self = Self::Indexed(13);
    pub const CYAN: Self = Self::Indexed(14);
    pub const WHITE: Self = Self::Indexed(15);
}

/// A foreground/background color pair. `None` inherits whatever is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Style {
    pub const fn pair(fg: Color, bg: Color) -> Self {
        Self {
            fg: Some(fg),
            bg: Some(bg),
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Merge `other` on top of `self` (like ratatui's `Style::patch`).
    pub fn patch(mut self, other: Style) -> Self {
        if let Some(fg) = other.fg {
            self.fg = Some(fg);
        }
        if let Some(bg) = other.bg {
            self.bg = Some(bg);
        }
        self
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;
