//! Shared status banner.

use leptos::prelude::*;

use crate::state::banner::BannerState;

#[component]
pub fn MessageBanner() -> impl IntoView {
    let banner = expect_context::<RwSignal<BannerState>>();

    view! {
        <div id="message" class=move || banner.get().class_name() role="status" aria-live="polite">
            {move || banner.get().text}
        </div>
    }
}
