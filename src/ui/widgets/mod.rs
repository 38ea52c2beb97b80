//! The fixed widget set. Every widget renders itself onto a [`Canvas`]; none of them share
//! mutable state.

pub mod label;
pub mod menu;
pub mod panel;
pub mod status;

pub use label::Label;
pub use menu::{MenuBar, MenuItem, MenuResponse, MenuState, MenuStyles, SubItem};
pub use panel::Panel;
pub use status::StatusBar;

use crate::ui::backend::Backend;
use crate::ui::core::canvas::Canvas;
use std::io;

#[derive(Debug)]
pub enum Widget {
    Label(Label),
    Panel(Panel),
    MenuBar(MenuBar),
    StatusBar(StatusBar),
}

impl Widget {
    pub fn draw<B: Backend>(&self, canvas: &mut Canvas<B>) -> io::Result<()> {
        match self {
            Widget::Label(w) => w.draw(canvas),
            Widget::Panel(w) => w.draw(canvas),
            Widget::MenuBar(w) => w.draw(canvas),
            Widget::StatusBar(w) => w.draw(canvas),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Label(_) => "label",
            Widget::Panel(_) => "panel",
            Widget::MenuBar(_) => "menuBar",
            Widget::StatusBar(_) => "statusBar",
        }
    }
}

impl From<Label> for Widget {
    fn from(w: Label) -> Self {
        Widget::Label(w)
    }
}

impl From<Panel> for Widget {
    fn from(w: Panel) -> Self {
        Widget::Panel(w)
    }
}

impl From<MenuBar> for Widget {
    fn from(w: MenuBar) -> Self {
        Widget::MenuBar(w)
    }
}

impl From<StatusBar> for Widget {
    fn from(w: StatusBar) -> Self {
        Widget::StatusBar(w)
    }
}
