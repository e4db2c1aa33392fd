//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the activities page as a pure function of shared state
//! read from Leptos context. User actions are reported upward through
//! callbacks; components never call the API themselves.

pub mod activity_card;
pub mod activity_list;
pub mod message_banner;
pub mod signup_panel;
