//! Unit tests for theme resolution and transitions

use dronewatch_dashboard::theme::{resolve_initial, Theme};

#[test]
fn test_persisted_choice_wins_over_os_preference() {
    assert_eq!(resolve_initial(Some(Theme::Light), true), Theme::Light);
    assert_eq!(resolve_initial(Some(Theme::Dark), false), Theme::Dark);
}

#[test]
fn test_os_preference_used_when_nothing_persisted() {
    assert_eq!(resolve_initial(None, true), Theme::Dark);
    assert_eq!(resolve_initial(None, false), Theme::Light);
}

#[test]
fn test_string_forms_round_trip() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn test_unknown_strings_rejected() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("solarized"), None);
}

#[test]
fn test_double_toggle_is_identity() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}
