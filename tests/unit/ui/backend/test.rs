use super::*;
use crate::ui::core::style::Color;

#[test]
fn draw_text_clips_wide_glyphs_that_do_not_fit() {
    let mut buf = TestBuffer::new(Size::new(1, 1));
    draw_text(&mut buf, Pos::new(0, 0), "👍", Style::default());
    assert_eq!(buf.cell(0, 0).unwrap().symbol, " ");
}

#[test]
fn draw_text_renders_wide_glyphs_when_they_fit() {
    let mut buf = TestBuffer::new(Size::new(2, 1));
    draw_text(&mut buf, Pos::new(0, 0), "👍", Style::default());
    assert_eq!(buf.cell(0, 0).unwrap().symbol, "👍");
    assert_eq!(buf.cell(1, 0).unwrap().symbol, " ");
}

#[test]
fn print_applies_style_to_every_cell() {
    let mut backend = TestBackend::new(5, 1);
    let style = Style::pair(Color::BLACK, Color::YELLOW);
    backend.print(Pos::new(1, 0), "abc", style).unwrap();
    assert_eq!(backend.row_text(0), " abc ");
    assert_eq!(backend.cell(1, 0).unwrap().style, style);
    assert_eq!(backend.cell(4, 0).unwrap().style, Style::default());
    assert_eq!(backend.writes(), 1);
}

#[test]
fn clear_resets_cells_and_counts() {
    let mut backend = TestBackend::new(3, 1);
    backend.print(Pos::new(0, 0), "xyz", Style::default()).unwrap();
    backend.clear().unwrap();
    assert_eq!(backend.row_text(0), "   ");
    assert_eq!(backend.clears(), 1);
}

#[test]
fn resize_keeps_overlapping_cells() {
    let mut backend = TestBackend::new(4, 2);
    backend.print(Pos::new(0, 0), "abcd", Style::default()).unwrap();
    backend.resize(2, 3);
    assert_eq!(backend.size().unwrap(), Size::new(2, 3));
    assert_eq!(backend.row_text(0), "ab");
    assert_eq!(backend.row_text(2), "  ");
}
