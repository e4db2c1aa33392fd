//! Removal targets read off delegated clicks.

#[cfg(test)]
#[path = "removal_test.rs"]
mod removal_test;

/// Attribute carrying the activity name on a removal control.
pub const ACTIVITY_ATTR: &str = "data-activity";
/// Attribute carrying the participant email on a removal control.
pub const EMAIL_ATTR: &str = "data-email";
/// Selector matching removal controls inside the activity list.
pub const REMOVE_SELECTOR: &str = "button.remove-participant[data-email]";

/// The `(activity, email)` pair a removal control is bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemovalTarget {
    pub activity: String,
    pub email: String,
}

impl RemovalTarget {
    /// Build from the control's attributes; both must be present and non-empty.
    pub fn from_attributes(activity: Option<String>, email: Option<String>) -> Option<Self> {
        let activity = activity.filter(|a| !a.is_empty())?;
        let email = email.filter(|e| !e.is_empty())?;
        Some(Self { activity, email })
    }

    /// Text of the confirmation prompt.
    pub fn prompt(&self) -> String {
        format!("Remove {} from {}?", self.email, self.activity)
    }

    /// Ask `confirm` and keep the target only if the user agreed.
    pub fn confirmed_by(self, confirm: impl FnOnce(&str) -> bool) -> Option<Self> {
        confirm(&self.prompt()).then_some(self)
    }
}
