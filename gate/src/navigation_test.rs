use super::*;

#[test]
fn parse_known_timing_types() {
    assert_eq!(NavigationKind::parse("navigate"), Some(NavigationKind::Navigate));
    assert_eq!(NavigationKind::parse("reload"), Some(NavigationKind::Reload));
    assert_eq!(NavigationKind::parse("back_forward"), Some(NavigationKind::BackForward));
    assert_eq!(NavigationKind::parse("prerender"), Some(NavigationKind::Prerender));
}

#[test]
fn parse_is_case_sensitive() {
    assert_eq!(NavigationKind::parse("Reload"), None);
}

#[test]
fn parse_unknown_is_none() {
    assert_eq!(NavigationKind::parse(""), None);
    assert_eq!(NavigationKind::parse("refresh"), None);
}

#[test]
fn display_matches_timing_string() {
    for kind in [
        NavigationKind::Navigate,
        NavigationKind::Reload,
        NavigationKind::BackForward,
        NavigationKind::Prerender,
    ] {
        assert_eq!(NavigationKind::parse(&kind.to_string()), Some(kind));
    }
}

#[test]
fn is_reload_only_for_reload() {
    assert!(is_reload(&FixedNavigation::reload()));
    assert!(!is_reload(&FixedNavigation::navigate()));
    assert!(!is_reload(&FixedNavigation(Some(NavigationKind::BackForward))));
    assert!(!is_reload(&FixedNavigation(Some(NavigationKind::Prerender))));
}

#[test]
fn missing_timing_is_not_a_reload() {
    assert!(!is_reload(&FixedNavigation::unknown()));
    assert!(!is_reload(&FixedNavigation::default()));
}
