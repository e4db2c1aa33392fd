//! Browser DOM glue for delegated removal clicks and confirmation prompts.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser there is no user to ask, so `confirm` answers "no"
//! and nothing destructive can start from a native build.

#[cfg(feature = "csr")]
use crate::state::removal::{ACTIVITY_ATTR, EMAIL_ATTR, REMOVE_SELECTOR, RemovalTarget};

/// Resolve the removal control a click landed on, if any.
///
/// The list container owns the only click listener; the clicked node may be
/// the button itself or something nested inside it.
#[cfg(feature = "csr")]
pub fn removal_target(ev: &leptos::ev::MouseEvent) -> Option<RemovalTarget> {
    use wasm_bindgen::JsCast;

    let control = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(REMOVE_SELECTOR).ok().flatten())?;
    RemovalTarget::from_attributes(control.get_attribute(ACTIVITY_ATTR), control.get_attribute(EMAIL_ATTR))
}

/// Show the browser's blocking confirmation dialog.
pub fn confirm(prompt: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = prompt;
        false
    }
}

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;
