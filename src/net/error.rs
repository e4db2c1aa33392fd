//! Failure taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught at its call site and turned into banner text;
//! nothing here is allowed to propagate past a flow's settle step.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why an API call did not produce the expected body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server rejected request: status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// The response body was not the JSON we expected.
    #[error("response parse failed: {0}")]
    Decode(String),
}

/// Banner fallbacks for one flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FailureText {
    /// Shown when the server rejects the request without a usable detail.
    pub rejected: &'static str,
    /// Shown when the request never completed or the body was unreadable.
    pub unreachable: &'static str,
}

pub const SIGNUP_FAILURE: FailureText =
    FailureText { rejected: "An error occurred", unreachable: "Failed to sign up. Please try again." };

pub const REMOVAL_FAILURE: FailureText = FailureText {
    rejected: "Failed to remove participant",
    unreachable: "Failed to remove participant. Please try again.",
};

impl ApiError {
    /// Text for the status banner.
    pub fn user_message(&self, text: FailureText) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } => detail.clone(),
            Self::Rejected { detail: None, .. } => text.rejected.to_owned(),
            Self::Transport(_) | Self::Decode(_) => text.unreachable.to_owned(),
        }
    }

    /// Whether the server answered at all.
    pub fn is_server_reported(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
