//! Signup form: email input, activity selection, and submit control.
//!
//! DESIGN
//! ======
//! Field values live in the shared `SignupForm` state so a successful
//! signup can clear them and a failed one leaves them as typed. Selection
//! options are rebuilt from the catalog after every reload.

use leptos::prelude::*;

use crate::state::catalog::CatalogState;
use crate::state::signup::SignupForm;

pub const PLACEHOLDER_OPTION: &str = "-- Select an activity --";

#[component]
pub fn SignupPanel(on_submit: Callback<()>) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let form = expect_context::<RwSignal<SignupForm>>();

    let options = move || {
        catalog
            .get()
            .option_names()
            .into_iter()
            .map(|name| {
                let value = name.clone();
                view! { <option value=value>{name}</option> }
            })
            .collect::<Vec<_>>()
    };

    // Re-apply the selection after options are rebuilt.
    let selected = move || {
        catalog.track();
        form.get().activity
    };

    view! {
        <div id="signup-container">
            <h3>"Sign Up for an Activity"</h3>
            <form
                id="signup-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <div class="form-group">
                    <label for="email">"Student Email:"</label>
                    <input
                        type="email"
                        id="email"
                        required=true
                        placeholder="your-email@example.edu"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="activity">"Select Activity:"</label>
                    <select
                        id="activity"
                        required=true
                        prop:value=selected
                        on:change=move |ev| form.update(|f| f.activity = event_target_value(&ev))
                    >
                        <option value="">{PLACEHOLDER_OPTION}</option>
                        {options}
                    </select>
                </div>
                <button type="submit" disabled=move || form.get().submitting>
                    "Sign Up"
                </button>
            </form>
        </div>
    }
}
