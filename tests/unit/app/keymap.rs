use super::*;
use crate::core::event::KeyModifiers;

#[test]
fn arrows_enter_and_esc_drive_the_menu() {
    let keymap = Keymap::new();
    assert_eq!(
        keymap.resolve(&Key::simple(KeyCode::Left)),
        Some(&Command::Menu(MenuKey::Left))
    );
    assert_eq!(
        keymap.resolve(&Key::simple(KeyCode::Esc)),
        Some(&Command::Menu(MenuKey::Escape))
    );
    assert_eq!(
        keymap.resolve(&Key::simple(KeyCode::Enter)),
        Some(&Command::Menu(MenuKey::Enter))
    );
}

#[test]
fn quit_is_case_insensitive() {
    let keymap = Keymap::new();
    assert_eq!(
        keymap.resolve(&Key::simple(KeyCode::Char('q'))),
        Some(&Command::Quit)
    );
    assert_eq!(
        keymap.resolve(&Key::simple(KeyCode::Char('Q'))),
        Some(&Command::Quit)
    );
}

#[test]
fn f5_refreshes() {
    let keymap = Keymap::new();
    assert_eq!(
        keymap.resolve(&Key::simple(KeyCode::F(5))),
        Some(&Command::Refresh)
    );
}

#[test]
fn modified_arrows_are_unbound() {
    let keymap = Keymap::new();
    assert_eq!(keymap.resolve(&Key::ctrl(KeyCode::Left)), None);
    assert_eq!(
        keymap.resolve(&Key::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
        None
    );
}

#[test]
fn bind_overrides_defaults() {
    let mut keymap = Keymap::new();
    keymap.bind(Key::simple(KeyCode::Char('r')), Command::Refresh);
    assert_eq!(
        keymap.resolve(&Key::simple(KeyCode::Char('r'))),
        Some(&Command::Refresh)
    );
}
