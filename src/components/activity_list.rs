//! Activity list container with delegated removal dispatch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards are rebuilt whenever the catalog changes, so the container holds
//! the single click listener and resolves which removal control was hit.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::activity_card::ActivityCard;
use crate::state::catalog::{CatalogState, LoadStatus};
use crate::state::removal::RemovalTarget;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// List of activity cards, or the loading/failure placeholder.
#[component]
pub fn ActivityList(on_remove: Callback<RemovalTarget>) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            if let Some(target) = crate::util::dom::removal_target(&ev) {
                ev.prevent_default();
                on_remove.run(target);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, on_remove);
        }
    };

    let body = move || {
        let state = catalog.get();
        match state.status {
            LoadStatus::Loading => view! { <p>{LOADING_TEXT}</p> }.into_any(),
            LoadStatus::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_any(),
            LoadStatus::Ready => state
                .activities
                .iter()
                .cloned()
                .map(|activity| view! { <ActivityCard activity=activity/> })
                .collect::<Vec<_>>()
                .into_any(),
        }
    };

    view! {
        <div id="activities-list" on:click=on_click>
            {body}
        </div>
    }
}
