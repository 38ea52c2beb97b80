use super::*;

#[test]
fn truncate_to_width_does_not_split_utf8() {
    let text = "éé";
    let end = truncate_to_width(text, 1);
    assert_eq!(end, "é".len());
    assert!(text.is_char_boundary(end));
    assert_eq!(&text[..end], "é");
}

#[test]
fn truncate_to_width_counts_wide_glyphs_as_two_cells() {
    let text = "你好世界";
    assert_eq!(&text[..truncate_to_width(text, 4)], "你好");
    assert_eq!(&text[..truncate_to_width(text, 3)], "你");
}

#[test]
fn truncate_to_width_handles_empty_and_zero_width() {
    assert_eq!(truncate_to_width("", 5), 0);
    assert_eq!(truncate_to_width("abc", 0), 0);
    assert_eq!(truncate_to_width("abc", 10), 3);
}

#[test]
fn fit_to_width_pads_short_text() {
    assert_eq!(fit_to_width("ab", 5), "ab   ");
}

#[test]
fn fit_to_width_truncates_long_text_without_wrapping() {
    let text = "a".repeat(40);
    let fitted = fit_to_width(&text, 10);
    assert_eq!(fitted, "a".repeat(10));
}

#[test]
fn fit_to_width_pads_after_dropping_straddling_wide_glyph() {
    assert_eq!(fit_to_width("你好", 3), "你 ");
}
