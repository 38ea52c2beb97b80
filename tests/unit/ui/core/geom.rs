use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10, 20, 3, 2); // x:10..13, y:20..22
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));

    // Right/bottom edges are exclusive.
    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));

    assert!(!r.contains(Pos::new(9, 20)));
    assert!(!r.contains(Pos::new(10, 19)));
}

#[test]
fn rect_empty_never_contains() {
    let r = Rect::new(0, 0, 0, 10);
    assert!(!r.contains(Pos::new(0, 0)));
    let r = Rect::new(0, 0, 10, 0);
    assert!(!r.contains(Pos::new(0, 0)));
}

#[test]
fn intersect_clips_to_overlap() {
    let screen = Rect::from(Size::new(10, 5));
    let popup = Rect::new(7, 3, 6, 4);
    assert_eq!(popup.intersect(screen), Rect::new(7, 3, 3, 2));

    let outside = Rect::new(20, 20, 2, 2);
    assert!(outside.intersect(screen).is_empty());
}
