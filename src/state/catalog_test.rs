use super::*;
use crate::net::types::Activity;

fn activity(name: &str, max: u32, participants: &[&str]) -> Activity {
    Activity {
        name: name.to_owned(),
        description: format!("{name} description"),
        schedule: "Mondays".to_owned(),
        max_participants: max,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

fn ready_state() -> CatalogState {
    let mut state = CatalogState::default();
    state.replace(Catalog::new(vec![
        activity("Chess Club", 10, &["a@x.com"]),
        activity("Gym Class", 2, &[]),
    ]));
    state
}

#[test]
fn catalog_state_defaults_to_loading_and_empty() {
    let state = CatalogState::default();
    assert_eq!(state.status, LoadStatus::Loading);
    assert!(state.activities.is_empty());
}

#[test]
fn replace_marks_ready() {
    let state = ready_state();
    assert_eq!(state.status, LoadStatus::Ready);
    assert_eq!(state.activities.len(), 2);
}

#[test]
fn apply_signup_appends_and_decrements_spots() {
    let mut state = ready_state();
    assert_eq!(state.activities.get("Chess Club").unwrap().spots_left(), 9);

    state.apply_signup("Chess Club", "b@x.com").unwrap();

    let chess = state.activities.get("Chess Club").unwrap();
    assert_eq!(chess.participants, vec!["a@x.com".to_owned(), "b@x.com".to_owned()]);
    assert_eq!(chess.spots_left(), 8);
}

#[test]
fn apply_signup_creates_first_participant() {
    let mut state = ready_state();
    state.apply_signup("Gym Class", "g@x.com").unwrap();
    assert_eq!(state.activities.get("Gym Class").unwrap().participants, vec!["g@x.com".to_owned()]);
}

#[test]
fn apply_signup_floors_spots_at_zero() {
    let mut state = ready_state();
    state.apply_signup("Gym Class", "1@x.com").unwrap();
    state.apply_signup("Gym Class", "2@x.com").unwrap();
    state.apply_signup("Gym Class", "3@x.com").unwrap();
    let gym = state.activities.get("Gym Class").unwrap();
    assert_eq!(gym.participants.len(), 3);
    assert_eq!(gym.spots_left(), 0);
}

#[test]
fn apply_signup_leaves_other_cards_alone() {
    let mut state = ready_state();
    let before = state.activities.get("Gym Class").cloned();
    state.apply_signup("Chess Club", "b@x.com").unwrap();
    assert_eq!(state.activities.get("Gym Class").cloned(), before);
}

#[test]
fn apply_signup_unknown_activity_is_error() {
    let mut state = ready_state();
    let before = state.clone();
    assert_eq!(
        state.apply_signup("Robotics", "b@x.com"),
        Err(CatalogError::UnknownActivity("Robotics".to_owned()))
    );
    assert_eq!(state, before);
}

#[test]
fn apply_signup_while_failed_is_error() {
    let mut state = ready_state();
    state.mark_failed();
    assert!(state.apply_signup("Chess Club", "b@x.com").is_err());
    assert_eq!(state.activities.get("Chess Club").unwrap().participants.len(), 1);
}

#[test]
fn mark_failed_keeps_known_options() {
    let mut state = ready_state();
    state.mark_failed();
    assert_eq!(state.status, LoadStatus::Failed);
    assert_eq!(state.option_names(), vec!["Chess Club".to_owned(), "Gym Class".to_owned()]);
}

#[test]
fn replace_after_failure_recovers() {
    let mut state = ready_state();
    state.mark_failed();
    state.replace(Catalog::new(vec![activity("Drama", 5, &[])]));
    assert_eq!(state.status, LoadStatus::Ready);
    assert_eq!(state.option_names(), vec!["Drama".to_owned()]);
}
