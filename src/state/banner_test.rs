use super::*;

#[test]
fn banner_starts_hidden() {
    let banner = BannerState::default();
    assert!(!banner.visible);
    assert!(banner.text.is_empty());
    assert_eq!(banner.class_name(), "message hidden");
}

#[test]
fn success_shows_message() {
    let mut banner = BannerState::default();
    banner.success("Signed up b@x.com for Chess Club");
    assert!(banner.visible);
    assert_eq!(banner.kind, BannerKind::Success);
    assert_eq!(banner.class_name(), "message success");
}

#[test]
fn error_overwrites_previous_message() {
    let mut banner = BannerState::default();
    banner.success("ok");
    banner.error("Student already signed up");
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.text, "Student already signed up");
    assert_eq!(banner.class_name(), "message error");
}

#[test]
fn matching_timer_hides_banner() {
    let mut banner = BannerState::default();
    let generation = banner.success("ok");
    assert!(banner.hide_if_current(generation));
    assert!(!banner.visible);
}

#[test]
fn stale_timer_does_not_hide_newer_message() {
    let mut banner = BannerState::default();
    let first = banner.success("first");
    let second = banner.error("second");
    assert_ne!(first, second);

    assert!(!banner.hide_if_current(first));
    assert!(banner.visible);
    assert_eq!(banner.text, "second");

    assert!(banner.hide_if_current(second));
}

#[test]
fn hiding_twice_is_a_no_op() {
    let mut banner = BannerState::default();
    let generation = banner.success("ok");
    assert!(banner.hide_if_current(generation));
    assert!(!banner.hide_if_current(generation));
}

#[test]
fn every_show_advances_generation() {
    let mut banner = BannerState::default();
    let start = banner.generation();
    banner.success("a");
    banner.success("a");
    assert_eq!(banner.generation(), start + 2);
}
