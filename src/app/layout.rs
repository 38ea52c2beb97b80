//! Builds the widget tree for the current terminal size.
//!
//! Called once at startup and again on every refresh; nothing here is cached between calls.

use crate::core::{Command, UiConfig};
use crate::ui::backend::Backend;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Size;
use crate::ui::widgets::{Label, MenuBar, MenuItem, MenuStyles, Panel, StatusBar, SubItem, Widget};
use std::io;

pub const PANEL_TITLE: &str = "CUI Window";
pub const TITLE_TEXT: &str = "Hello CUI";
pub const INFO_TEXT: &str = "←/→ menu  ↑/↓ items  Enter run  Esc close  F5 refresh  Q quit";

/// Widgets in paint order. Later widgets draw over earlier ones.
#[derive(Debug, Default)]
pub struct Screen {
    widgets: Vec<Widget>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, widget: impl Into<Widget>) {
        self.widgets.push(widget.into());
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn menu_bar(&self) -> Option<&MenuBar> {
        self.widgets.iter().find_map(|w| match w {
            Widget::MenuBar(menu) => Some(menu),
            _ => None,
        })
    }

    pub fn menu_bar_mut(&mut self) -> Option<&mut MenuBar> {
        self.widgets.iter_mut().find_map(|w| match w {
            Widget::MenuBar(menu) => Some(menu),
            _ => None,
        })
    }

    pub fn status_bar(&self) -> Option<&StatusBar> {
        self.widgets.iter().find_map(|w| match w {
            Widget::StatusBar(status) => Some(status),
            _ => None,
        })
    }

    pub fn status_bar_mut(&mut self) -> Option<&mut StatusBar> {
        self.widgets.iter_mut().find_map(|w| match w {
            Widget::StatusBar(status) => Some(status),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.widgets.iter().filter_map(|w| match w {
            Widget::Label(label) => Some(label),
            _ => None,
        })
    }

    pub fn draw_all<B: Backend>(&self, canvas: &mut Canvas<B>) -> io::Result<()> {
        for widget in &self.widgets {
            widget.draw(canvas)?;
        }
        Ok(())
    }
}

pub fn build(size: Size, config: &UiConfig) -> Screen {
    let theme = &config.theme;
    let pad = i32::from(config.padding);
    let width = i32::from(size.width);
    let height = i32::from(size.height);

    // Panel sits below the menu bar with `pad` cells of margin on every side.
    let box_x = pad;
    let box_y = 1 + pad;
    let box_w = (width - pad * 2).max(i32::from(config.min_panel.width));
    let box_h = (height - (1 + pad) - (1 + pad)).max(i32::from(config.min_panel.height));
    let box_w = clamp_u16(box_w);
    let box_h = clamp_u16(box_h);
    let label_w = box_w.saturating_sub(4);

    let mut screen = Screen::new();
    screen.push(Panel::new(box_x, box_y, box_w, box_h, theme.panel).with_title(PANEL_TITLE));
    screen.push(Label::new(
        box_x + 2,
        box_y + 2,
        label_w,
        TITLE_TEXT,
        theme.title_label,
    ));
    screen.push(Label::new(
        box_x + 2,
        box_y + 4,
        label_w,
        INFO_TEXT,
        theme.info_label,
    ));
    screen.push(main_menu(config));
    screen.push(StatusBar::new("", theme.status));
    screen
}

pub fn main_menu(config: &UiConfig) -> MenuBar {
    let theme = &config.theme;
    let styles = MenuStyles {
        bar: theme.menu_bar,
        selected: theme.menu_selected,
        dropdown: theme.dropdown,
        dropdown_selected: theme.dropdown_selected,
    };

    MenuBar::new(styles, config.dropdown_width)
        .item(
            MenuItem::new("File")
                .child(SubItem::new("Open").on_activate(|| status("Open clicked")))
                .child(SubItem::new("Save").on_activate(|| status("Save clicked")))
                .child(SubItem::new("Exit").on_activate(|| Command::Quit)),
        )
        .item(
            MenuItem::new("Edit")
                .child(SubItem::new("Copy").on_activate(|| status("Copy clicked")))
                .child(SubItem::new("Paste").on_activate(|| status("Paste clicked"))),
        )
        .item(MenuItem::new("View").on_activate(|| status("View menu clicked")))
        .item(
            MenuItem::new("Help")
                .child(SubItem::new("About").on_activate(|| status("About: CUI Example"))),
        )
}

fn status(msg: &str) -> Command {
    Command::Status(msg.to_string())
}

fn clamp_u16(v: i32) -> u16 {
    v.clamp(0, i32::from(u16::MAX)) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/app/layout.rs"]
mod tests;
