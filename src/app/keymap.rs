//! Fixed key bindings: key → command.

use crate::core::event::{Key, KeyCode};
use crate::core::{Command, MenuKey};
use rustc_hash::FxHashMap;

pub struct Keymap {
    bindings: FxHashMap<Key, Command>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        let mut bindings = FxHashMap::default();

        let menu = [
            (KeyCode::Left, MenuKey::Left),
            (KeyCode::Right, MenuKey::Right),
            (KeyCode::Up, MenuKey::Up),
            (KeyCode::Down, MenuKey::Down),
            (KeyCode::Enter, MenuKey::Enter),
            (KeyCode::Esc, MenuKey::Escape),
        ];
        for (code, menu_key) in menu {
            bindings.insert(Key::simple(code), Command::Menu(menu_key));
        }

        // Letters are case-insensitive: `Q` arrives as `q` + SHIFT.
        bindings.insert(Key::simple(KeyCode::Char('q')), Command::Quit);
        bindings.insert(Key::shift(KeyCode::Char('q')), Command::Quit);
        bindings.insert(Key::simple(KeyCode::F(5)), Command::Refresh);

        Self { bindings }
    }

    pub fn resolve(&self, key: &Key) -> Option<&Command> {
        self.bindings.get(key)
    }

    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.insert(key, command);
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Keymap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keymap")
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/keymap.rs"]
mod tests;
