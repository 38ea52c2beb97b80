//! Semantic commands: what a key press or a menu action asks the loop to do.

/// Navigation inputs understood by the menu bar state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKey {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    Refresh,
    Menu(MenuKey),
    /// Show a message on the status bar.
    Status(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::Quit => "quit",
            Command::Refresh => "refresh",
            Command::Menu(MenuKey::Left) => "menuLeft",
            Command::Menu(MenuKey::Right) => "menuRight",
            Command::Menu(MenuKey::Up) => "menuUp",
            Command::Menu(MenuKey::Down) => "menuDown",
            Command::Menu(MenuKey::Enter) => "menuEnter",
            Command::Menu(MenuKey::Escape) => "menuEscape",
            Command::Status(_) => "status",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
