use super::*;

#[test]
fn defaults_to_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn parse_round_trips_as_str() {
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("solarized"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert!(Theme::Light.toggled().is_dark());
}
