use super::*;

#[test]
fn short_content_passes_through_untruncated() {
    assert_eq!(preview("a quiet walk", 160), "a quiet walk");
}

#[test]
fn long_content_is_cut_with_ellipsis() {
    let long = "x".repeat(200);
    let short = preview(&long, 160);
    assert_eq!(short.chars().count(), 161);
    assert!(short.ends_with('…'));
}

#[test]
fn truncation_respects_multibyte_characters() {
    let content = "é".repeat(10);
    let short = preview(&content, 4);
    assert_eq!(short, "éééé…");
}

#[test]
fn content_exactly_at_limit_is_untouched() {
    let content = "y".repeat(160);
    assert_eq!(preview(&content, 160), content);
}
