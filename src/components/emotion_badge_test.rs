use super::*;

#[test]
fn known_emotions_map_to_their_modifier() {
    assert_eq!(badge_class("Joy"), "emotion-badge--joy");
    assert_eq!(badge_class("SADNESS"), "emotion-badge--sadness");
    assert_eq!(badge_class("neutral"), "emotion-badge--neutral");
}

#[test]
fn unknown_emotions_fall_back_to_other() {
    assert_eq!(badge_class("Surprise"), "emotion-badge--other");
    assert_eq!(badge_class(""), "emotion-badge--other");
}
