use super::*;
use crate::core::event::{KeyCode, KeyModifiers};
use crate::ui::backend::test::TestBackend;
use crate::ui::widgets::MenuState;
use std::collections::VecDeque;

struct Scripted {
    keys: VecDeque<Key>,
}

impl Scripted {
    fn new(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            keys: codes.into_iter().map(Key::simple).collect(),
        }
    }
}

impl EventSource for Scripted {
    fn next_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

fn app() -> App<TestBackend> {
    App::new(TestBackend::new(40, 12), UiConfig::default()).unwrap()
}

fn press(app: &mut App<TestBackend>, code: KeyCode) {
    app.handle_key(Key::simple(code)).unwrap();
}

fn status_row(app: &App<TestBackend>) -> String {
    app.canvas().backend().row_text(11)
}

fn menu_state(app: &App<TestBackend>) -> MenuState {
    app.screen().menu_bar().unwrap().state()
}

#[test]
fn startup_paints_everything_once() {
    let app = app();
    let backend = app.canvas().backend();
    assert_eq!(backend.clears(), 1);
    assert!(!backend.cursor_visible());
    assert!(backend.row_text(0).starts_with("  File "));
    assert!(status_row(&app).starts_with(READY_MESSAGE));
}

#[test]
fn quit_ends_loop_from_closed_state() {
    let mut app = app();
    let mut events = Scripted::new([KeyCode::Right, KeyCode::Char('q'), KeyCode::Left]);
    app.run(&mut events).unwrap();
    assert!(app.should_quit());
    assert_eq!(events.keys.len(), 1);
}

#[test]
fn quit_ends_loop_from_open_dropdown() {
    let mut app = app();
    let mut events = Scripted::new([KeyCode::Enter, KeyCode::Down, KeyCode::Char('Q')]);
    app.run(&mut events).unwrap();
    assert!(app.should_quit());
    assert!(events.keys.is_empty());
}

#[test]
fn run_propagates_event_source_errors() {
    let mut app = app();
    let mut events = Scripted::new([KeyCode::Right]);
    let err = app.run(&mut events).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    assert!(!app.should_quit());
}

#[test]
fn exit_item_quits() {
    let mut app = app();
    for code in [KeyCode::Enter, KeyCode::Up, KeyCode::Enter] {
        press(&mut app, code);
    }
    assert!(app.should_quit());
}

#[test]
fn save_action_reports_on_status_bar() {
    let mut app = app();
    for code in [KeyCode::Enter, KeyCode::Down, KeyCode::Enter] {
        press(&mut app, code);
    }
    assert!(status_row(&app).starts_with("Save clicked"));
    assert_eq!(menu_state(&app), MenuState::Closed);
    assert!(!app.should_quit());
}

#[test]
fn childless_item_activates_without_dropdown() {
    let mut app = app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert!(status_row(&app).starts_with("View menu clicked"));
    assert_eq!(menu_state(&app), MenuState::Closed);
}

#[test]
fn unbound_key_shows_its_name_and_leaves_menu_alone() {
    let mut app = app();
    press(&mut app, KeyCode::Right);
    app.handle_key(Key::new(KeyCode::Char('x'), KeyModifiers::CONTROL))
        .unwrap();
    assert!(status_row(&app).starts_with("Key: X (Ctrl)"));
    assert_eq!(app.screen().menu_bar().unwrap().selected(), 1);
}

#[test]
fn key_without_transition_shows_its_name() {
    let mut app = app();
    press(&mut app, KeyCode::Esc);
    assert!(status_row(&app).starts_with("Key: Esc"));

    press(&mut app, KeyCode::Up);
    assert!(status_row(&app).starts_with("Key: UpArrow"));
    assert_eq!(menu_state(&app), MenuState::Closed);
}

#[test]
fn dropdown_is_painted_under_selected_item() {
    let mut app = app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    let backend = app.canvas().backend();
    // " Edit " starts at column 8; its dropdown one column further in.
    assert_eq!(&backend.row_text(1)[9..24], " Copy          ");
    assert_eq!(&backend.row_text(2)[9..24], " Paste         ");
}

#[test]
fn closing_dropdown_restores_underlying_cells() {
    let mut app = app();
    let before: Vec<String> = (0..12).map(|y| app.canvas().backend().row_text(y)).collect();

    press(&mut app, KeyCode::Enter);
    assert_ne!(app.canvas().backend().row_text(1), before[1]);
    assert_ne!(app.canvas().backend().row_text(3), before[3]);

    press(&mut app, KeyCode::Esc);
    for y in 0..11u16 {
        assert_eq!(
            app.canvas().backend().row_text(y),
            before[y as usize],
            "row {y}"
        );
    }
}

#[test]
fn navigation_never_clears_the_screen() {
    let mut app = app();
    for code in [
        KeyCode::Right,
        KeyCode::Left,
        KeyCode::Enter,
        KeyCode::Down,
        KeyCode::Esc,
        KeyCode::Tab,
    ] {
        press(&mut app, code);
    }
    assert_eq!(app.canvas().backend().clears(), 1);
}

#[test]
fn refresh_relayouts_with_live_size_and_resets_menu() {
    let mut app = app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert!(app.screen().menu_bar().unwrap().is_open());

    app.canvas_mut().backend_mut().resize(60, 20);
    press(&mut app, KeyCode::F(5));

    let backend = app.canvas().backend();
    assert_eq!(backend.clears(), 2);
    assert!(backend.row_text(19).starts_with(REFRESHED_MESSAGE));
    // Panel now spans the wider terminal: 60 - 2 * 2 columns.
    assert_eq!(backend.row_text(3).chars().nth(57), Some('┐'));

    let menu = app.screen().menu_bar().unwrap();
    assert_eq!(menu.state(), MenuState::Closed);
    assert_eq!(menu.selected(), 0);
}

#[test]
fn status_is_not_redrawn_for_plain_navigation() {
    let mut app = app();
    let writes_before = app.canvas().backend().writes();
    press(&mut app, KeyCode::Right);
    let writes = app.canvas().backend().writes() - writes_before;
    // Bar fill plus one write per top-level label.
    assert_eq!(writes, 1 + 4);
    assert!(status_row(&app).starts_with(READY_MESSAGE));
}
