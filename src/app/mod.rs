//! Interaction loop: one blocking key read, one state mutation, one repaint.

pub mod keymap;
pub mod layout;

use crate::core::event::{key_name, Key};
use crate::core::{Command, MenuKey, UiConfig};
use crate::ui::backend::Backend;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Rect;
use crate::ui::widgets::MenuResponse;
use keymap::Keymap;
use layout::Screen;
use std::io;

pub const READY_MESSAGE: &str = "Ready";
pub const REFRESHED_MESSAGE: &str = "Screen refreshed";

/// Source of key presses. `next_key` blocks until one is available.
pub trait EventSource {
    fn next_key(&mut self) -> io::Result<Key>;
}

pub struct App<B: Backend> {
    canvas: Canvas<B>,
    config: UiConfig,
    keymap: Keymap,
    screen: Screen,
    should_quit: bool,
}

impl<B: Backend> App<B> {
    /// Lays out and paints the initial screen.
    pub fn new(backend: B, config: UiConfig) -> io::Result<Self> {
        let mut app = Self {
            canvas: Canvas::new(backend),
            config,
            keymap: Keymap::new(),
            screen: Screen::new(),
            should_quit: false,
        };
        app.relayout(READY_MESSAGE)?;
        Ok(app)
    }

    pub fn canvas(&self) -> &Canvas<B> {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<B> {
        &mut self.canvas
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn into_backend(self) -> B {
        self.canvas.into_backend()
    }

    pub fn run(&mut self, events: &mut impl EventSource) -> io::Result<()> {
        while !self.should_quit {
            let key = events.next_key()?;
            self.handle_key(key)?;
        }
        tracing::info!("quit");
        Ok(())
    }

    pub fn handle_key(&mut self, key: Key) -> io::Result<()> {
        let Some(command) = self.keymap.resolve(&key).cloned() else {
            tracing::debug!(key = ?key, "unbound key");
            return self.show_status(key_name(&key));
        };
        tracing::debug!(command = command.name(), "dispatch");
        match command {
            Command::Menu(menu_key) => self.dispatch_menu(menu_key, Some(&key)),
            other => self.execute(other),
        }
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            // Quit wins over everything, including an open dropdown.
            Command::Quit => {
                self.should_quit = true;
                Ok(())
            }
            Command::Refresh => self.relayout(REFRESHED_MESSAGE),
            Command::Menu(menu_key) => self.dispatch_menu(menu_key, None),
            Command::Status(msg) => self.show_status(msg),
        }
    }

    fn dispatch_menu(&mut self, menu_key: MenuKey, key: Option<&Key>) -> io::Result<()> {
        let Some(menu) = self.screen.menu_bar_mut() else {
            return Ok(());
        };
        let before = (menu.state(), menu.selected(), menu.dropdown_rect());
        let response = menu.handle(menu_key);
        let after = (menu.state(), menu.selected(), menu.dropdown_rect());
        tracing::debug!(?menu_key, ?response, state = ?after.0, selected = after.1, "menu");

        if before != after {
            self.repaint_menu(before.2, after.2)?;
        }

        match response {
            MenuResponse::Ignored => match key {
                Some(key) => self.show_status(key_name(key)),
                None => Ok(()),
            },
            MenuResponse::Changed => Ok(()),
            MenuResponse::Activated { command } => match command {
                Some(command) => {
                    tracing::info!(command = command.name(), "menu action");
                    self.execute(command)
                }
                None => Ok(()),
            },
        }
    }

    /// Redraws the menu bar. A dropdown that closed (or moved) is blanked first and the rest
    /// of the tree is repainted over it so no stale cells survive.
    fn repaint_menu(&mut self, old: Option<Rect>, new: Option<Rect>) -> io::Result<()> {
        match old.filter(|old| Some(*old) != new) {
            Some(stale) => {
                self.canvas
                    .fill_rect(stale, self.config.theme.background)?;
                self.screen.draw_all(&mut self.canvas)?;
            }
            None => {
                if let Some(menu) = self.screen.menu_bar() {
                    menu.draw(&mut self.canvas)?;
                }
            }
        }
        self.canvas.flush()
    }

    fn show_status(&mut self, msg: impl Into<String>) -> io::Result<()> {
        let Some(status) = self.screen.status_bar_mut() else {
            return Ok(());
        };
        status.set_message(msg);
        status.draw(&mut self.canvas)?;
        self.canvas.flush()
    }

    /// Clears the terminal and rebuilds every widget from the live size.
    fn relayout(&mut self, status: &str) -> io::Result<()> {
        let size = self.canvas.size()?;
        tracing::info!(width = size.width, height = size.height, "layout");

        self.canvas.clear()?;
        self.canvas.set_cursor_visible(false)?;
        self.screen = layout::build(size, &self.config);
        if let Some(bar) = self.screen.status_bar_mut() {
            bar.set_message(status);
        }
        self.screen.draw_all(&mut self.canvas)?;
        self.canvas.flush()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/mod.rs"]
mod tests;
