use crate::ui::core::style::{Color, Style};

/// Color pairs for every widget the UI draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub menu_bar: Style,
    pub menu_selected: Style,
    pub dropdown: Style,
    pub dropdown_selected: Style,
    pub panel: Style,
    pub title_label: Style,
    pub info_label: Style,
    pub status: Style,
    /// Used to blank cells that no widget owns (e.g. a closed dropdown).
    pub background: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            menu_bar: Style::pair(Color::WHITE, Color::DARK_BLUE),
            menu_selected: Style::pair(Color::BLACK, Color::YELLOW),
            dropdown: Style::pair(Color::WHITE, Color::DARK_GRAY),
            dropdown_selected: Style::pair(Color::BLACK, Color::YELLOW),
            panel: Style::pair(Color::GRAY, Color::BLACK),
            title_label: Style::pair(Color::CYAN, Color::BLACK),
            info_label: Style::pair(Color::WHITE, Color::BLACK),
            status: Style::pair(Color::BLACK, Color::DARK_GRAY),
            background: Style::pair(Color::Reset, Color::Reset),
        }
    }
}
