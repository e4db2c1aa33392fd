use super::*;

fn filled() -> SignupForm {
    SignupForm { activity: "Chess Club".to_owned(), email: " b@x.com ".to_owned(), submitting: false }
}

#[test]
fn begin_trims_and_marks_submitting() {
    let mut form = filled();
    let request = form.begin().unwrap();
    assert_eq!(request, SignupRequest { activity: "Chess Club".to_owned(), email: "b@x.com".to_owned() });
    assert!(form.submitting);
}

#[test]
fn begin_while_submitting_is_blocked() {
    let mut form = filled();
    form.begin().unwrap();
    assert_eq!(form.begin(), Err(SignupBlocked::InFlight));
    assert!(form.submitting);
}

#[test]
fn begin_with_placeholder_selection_is_blocked() {
    let mut form = SignupForm { activity: String::new(), email: "b@x.com".to_owned(), submitting: false };
    assert_eq!(form.begin(), Err(SignupBlocked::MissingFields));
    assert!(!form.submitting);
}

#[test]
fn begin_with_blank_email_is_blocked() {
    let mut form = SignupForm { activity: "Chess Club".to_owned(), email: "   ".to_owned(), submitting: false };
    assert_eq!(form.begin(), Err(SignupBlocked::MissingFields));
}

#[test]
fn begin_does_not_validate_email_format() {
    let mut form = SignupForm { activity: "Chess Club".to_owned(), email: "not-an-email".to_owned(), submitting: false };
    assert!(form.begin().is_ok());
}

#[test]
fn finish_re_enables_submit() {
    let mut form = filled();
    form.begin().unwrap();
    form.finish();
    assert!(!form.submitting);
    assert!(form.begin().is_ok());
}

#[test]
fn reset_clears_fields_only() {
    let mut form = filled();
    form.begin().unwrap();
    form.reset();
    assert!(form.activity.is_empty());
    assert!(form.email.is_empty());
    assert!(form.submitting);
}
