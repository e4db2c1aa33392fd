//! Signup form state.
//!
//! `submitting` drives the disabled submit control; it is local to this
//! form and does not block removals or reloads.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

pub const MISSING_FIELDS_MESSAGE: &str = "Please choose an activity and enter an email.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Selected activity name; empty is the placeholder option.
    pub activity: String,
    pub email: String,
    pub submitting: bool,
}

/// A validated request ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}

/// Why a submit did not start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupBlocked {
    /// A signup from this form is already in flight.
    InFlight,
    /// Activity or email is blank.
    MissingFields,
}

impl SignupForm {
    /// Start a submission: marks the form busy and returns the request.
    ///
    /// Only blank fields are rejected here; email format and duplicate
    /// signups are left to the server.
    ///
    /// # Errors
    ///
    /// Returns a [`SignupBlocked`] reason without touching the form.
    pub fn begin(&mut self) -> Result<SignupRequest, SignupBlocked> {
        if self.submitting {
            return Err(SignupBlocked::InFlight);
        }
        let activity = self.activity.trim();
        let email = self.email.trim();
        if activity.is_empty() || email.is_empty() {
            return Err(SignupBlocked::MissingFields);
        }
        let request = SignupRequest { activity: activity.to_owned(), email: email.to_owned() };
        self.submitting = true;
        Ok(request)
    }

    /// Re-enable the submit control once the request settles.
    pub fn finish(&mut self) {
        self.submitting = false;
    }

    /// Clear both fields back to the placeholder state.
    pub fn reset(&mut self) {
        self.activity.clear();
        self.email.clear();
    }
}
