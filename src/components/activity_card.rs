//! Card for a single activity: details, availability, and participants.
//!
//! DESIGN
//! ======
//! Removal buttons carry their `(activity, email)` binding as data
//! attributes and register no handlers; the enclosing list dispatches
//! clicks for every card.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::Activity;

pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

fn availability_text(spots_left: u32) -> String {
    format!("{spots_left} spots left")
}

fn participants_heading(count: usize) -> String {
    format!("Participants ({count})")
}

/// A rendered activity card.
#[component]
pub fn ActivityCard(activity: Activity) -> impl IntoView {
    let spots_left = activity.spots_left();
    let Activity { name, description, schedule, participants, .. } = activity;

    let participants_view = if participants.is_empty() {
        view! { <div class="participants info">{NO_PARTICIPANTS_TEXT}</div> }.into_any()
    } else {
        let heading = participants_heading(participants.len());
        let rows = participants
            .into_iter()
            .map(|email| view! { <ParticipantRow activity=name.clone() email=email/> })
            .collect::<Vec<_>>();
        view! {
            <div class="participants">
                <h5>{heading}</h5>
                <ul>{rows}</ul>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability_text(spots_left)}
            </p>
            {participants_view}
        </div>
    }
}

/// One participant with its removal control.
#[component]
fn ParticipantRow(activity: String, email: String) -> impl IntoView {
    view! {
        <li>
            <span class="participant-email">{email.clone()}</span>
            <button
                type="button"
                class="remove-participant"
                data-activity=activity
                data-email=email
                title="Remove participant"
                aria-label="Remove participant"
            >
                "×"
            </button>
        </li>
    }
}
