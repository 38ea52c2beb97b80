use crate::ui::core::geom::Size;
use crate::ui::core::theme::Theme;

/// Fixed startup configuration. There is no file or CLI layer on top of this.
#[derive(Clone, Debug)]
pub struct UiConfig {
    pub theme: Theme,
    /// Every dropdown row is right-padded to this many columns.
    pub dropdown_width: u16,
    /// Gap between the screen edge (or menu bar) and the main panel.
    pub padding: u16,
    pub min_panel: Size,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            dropdown_width: 15,
            padding: 2,
            min_panel: Size::new(20, 8),
        }
    }
}
