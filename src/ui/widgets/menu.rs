//! Menu bar with one level of dropdown items.
//!
//! The bar owns its navigation state; the interaction loop feeds it [`MenuKey`]s and acts on
//! the returned [`MenuResponse`].

use crate::core::text_window::fit_to_width;
use crate::core::{Command, MenuKey};
use crate::ui::backend::Backend;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Rect;
use crate::ui::core::style::Style;
use std::fmt;
use std::io;
use unicode_width::UnicodeWidthStr;

/// Invoked on activation; the returned command is handed to the interaction loop.
pub type Action = Box<dyn FnMut() -> Command>;

/// First column of the first top-level label.
const BAR_START_X: u16 = 1;

/// A dropdown entry. Sub-items cannot have children of their own.
pub struct SubItem {
    pub label: String,
    action: Option<Action>,
}

impl SubItem {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        debug_assert!(!label.is_empty(), "menu labels must not be empty");
        Self {
            label,
            action: None,
        }
    }

    pub fn on_activate(mut self, action: impl FnMut() -> Command + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    fn activate(&mut self) -> Option<Command> {
        self.action.as_mut().map(|action| action())
    }
}

impl fmt::Debug for SubItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubItem")
            .field("label", &self.label)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// A top-level entry on the bar.
pub struct MenuItem {
    pub label: String,
    action: Option<Action>,
    children: Vec<SubItem>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        debug_assert!(!label.is_empty(), "menu labels must not be empty");
        Self {
            label,
            action: None,
            children: Vec::new(),
        }
    }

    pub fn on_activate(mut self, action: impl FnMut() -> Command + 'static) -> Self {
        self.action = Some(Box::new(action));
        self
    }

    pub fn child(mut self, child: SubItem) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(&self) -> &[SubItem] {
        &self.children
    }

    fn activate(&mut self) -> Option<Command> {
        self.action.as_mut().map(|action| action())
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("has_action", &self.action.is_some())
            .field("children", &self.children)
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    DropdownOpen { sub_selected: usize },
}

/// What a key did to the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuResponse {
    /// No transition exists for this key in the current state.
    Ignored,
    /// Selection or dropdown state moved; nothing was activated.
    Changed,
    /// An item was activated. `command` is what its action returned, if it has one.
    Activated { command: Option<Command> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuStyles {
    pub bar: Style,
    pub selected: Style,
    pub dropdown: Style,
    pub dropdown_selected: Style,
}

#[derive(Debug)]
pub struct MenuBar {
    items: Vec<MenuItem>,
    selected: usize,
    state: MenuState,
    styles: MenuStyles,
    dropdown_width: u16,
}

impl MenuBar {
    pub fn new(styles: MenuStyles, dropdown_width: u16) -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            state: MenuState::Closed,
            styles,
            dropdown_width,
        }
    }

    pub fn item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::DropdownOpen { .. })
    }

    /// Index of the highlighted dropdown entry, `None` while closed.
    pub fn sub_selected(&self) -> Option<usize> {
        match self.state {
            MenuState::Closed => None,
            MenuState::DropdownOpen { sub_selected } => Some(sub_selected),
        }
    }

    pub fn handle(&mut self, key: MenuKey) -> MenuResponse {
        match self.state {
            MenuState::Closed => self.handle_closed(key),
            MenuState::DropdownOpen { sub_selected } => self.handle_open(key, sub_selected),
        }
    }

    fn handle_closed(&mut self, key: MenuKey) -> MenuResponse {
        let n = self.items.len();
        if n == 0 {
            return MenuResponse::Ignored;
        }
        match key {
            MenuKey::Left => {
                self.selected = (self.selected + n - 1) % n;
                MenuResponse::Changed
            }
            MenuKey::Right => {
                self.selected = (self.selected + 1) % n;
                MenuResponse::Changed
            }
            MenuKey::Enter => {
                let item = &mut self.items[self.selected];
                if item.children.is_empty() {
                    MenuResponse::Activated {
                        command: item.activate(),
                    }
                } else {
                    self.state = MenuState::DropdownOpen { sub_selected: 0 };
                    MenuResponse::Changed
                }
            }
            MenuKey::Up | MenuKey::Down | MenuKey::Escape => MenuResponse::Ignored,
        }
    }

    fn handle_open(&mut self, key: MenuKey, sub_selected: usize) -> MenuResponse {
        let m = self.items[self.selected].children.len();
        match key {
            MenuKey::Up | MenuKey::Down if m == 0 => MenuResponse::Ignored,
            MenuKey::Up => {
                self.state = MenuState::DropdownOpen {
                    sub_selected: (sub_selected + m - 1) % m,
                };
                MenuResponse::Changed
            }
            MenuKey::Down => {
                self.state = MenuState::DropdownOpen {
                    sub_selected: (sub_selected + 1) % m,
                };
                MenuResponse::Changed
            }
            MenuKey::Escape => {
                self.state = MenuState::Closed;
                MenuResponse::Changed
            }
            MenuKey::Enter => {
                let command = self.items[self.selected]
                    .children
                    .get_mut(sub_selected)
                    .and_then(SubItem::activate);
                self.state = MenuState::Closed;
                MenuResponse::Activated { command }
            }
            MenuKey::Left | MenuKey::Right => MenuResponse::Ignored,
        }
    }

    /// Column where item `idx` starts (its leading space), measured from rendered widths.
    pub fn item_x(&self, idx: usize) -> u16 {
        self.items
            .iter()
            .take(idx)
            .fold(BAR_START_X, |x, item| {
                x.saturating_add(item_cell_width(&item.label))
                    .saturating_add(1)
            })
    }

    /// Area covered by the open dropdown, if any.
    pub fn dropdown_rect(&self) -> Option<Rect> {
        let MenuState::DropdownOpen { .. } = self.state else {
            return None;
        };
        let children = &self.items.get(self.selected)?.children;
        if children.is_empty() {
            return None;
        }
        let x = self.item_x(self.selected).saturating_add(1);
        let h = children.len().min(u16::MAX as usize) as u16;
        Some(Rect::new(x, 1, self.row_width(children), h))
    }

    fn row_width(&self, children: &[SubItem]) -> u16 {
        children
            .iter()
            .map(|sub| item_cell_width(&sub.label))
            .fold(self.dropdown_width, u16::max)
    }

    pub fn draw<B: Backend>(&self, canvas: &mut Canvas<B>) -> io::Result<()> {
        canvas.fill_line(0, ' ', self.styles.bar)?;

        let mut x = BAR_START_X;
        for (idx, item) in self.items.iter().enumerate() {
            let style = if idx == self.selected {
                self.styles.selected
            } else {
                self.styles.bar
            };
            let label = format!(" {} ", item.label);
            canvas.write_at(i32::from(x), 0, &label, style)?;
            x = x.saturating_add(label.width() as u16).saturating_add(1);
        }

        self.draw_dropdown(canvas)
    }

    fn draw_dropdown<B: Backend>(&self, canvas: &mut Canvas<B>) -> io::Result<()> {
        let (Some(rect), Some(sub_selected)) = (self.dropdown_rect(), self.sub_selected()) else {
            return Ok(());
        };
        let children = &self.items[self.selected].children;
        for (idx, sub) in children.iter().enumerate() {
            let style = if idx == sub_selected {
                self.styles.dropdown_selected
            } else {
                self.styles.dropdown
            };
            let row = fit_to_width(&format!(" {} ", sub.label), rect.w as usize);
            canvas.write_at(
                i32::from(rect.x),
                i32::from(rect.y) + idx as i32,
                &row,
                style,
            )?;
        }
        Ok(())
    }
}

/// Width of `" label "` on the bar.
fn item_cell_width(label: &str) -> u16 {
    label.width().saturating_add(2).min(u16::MAX as usize) as u16
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/menu.rs"]
mod tests;
