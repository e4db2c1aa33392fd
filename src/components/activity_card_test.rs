use super::*;

#[test]
fn availability_text_formats_spots() {
    assert_eq!(availability_text(9), "9 spots left");
    assert_eq!(availability_text(0), "0 spots left");
}

#[test]
fn participants_heading_formats_count() {
    assert_eq!(participants_heading(1), "Participants (1)");
    assert_eq!(participants_heading(12), "Participants (12)");
}

#[test]
fn chess_club_scenario_texts_follow_signup() {
    let mut chess = Activity {
        name: "Chess Club".to_owned(),
        description: String::new(),
        schedule: String::new(),
        max_participants: 10,
        participants: vec!["a@x.com".to_owned()],
    };
    assert_eq!(availability_text(chess.spots_left()), "9 spots left");
    assert_eq!(participants_heading(chess.participants.len()), "Participants (1)");

    chess.participants.push("b@x.com".to_owned());
    assert_eq!(availability_text(chess.spots_left()), "8 spots left");
    assert_eq!(participants_heading(chess.participants.len()), "Participants (2)");
}
