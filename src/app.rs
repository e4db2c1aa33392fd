//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ClientConfig;
use crate::pages::activities::ActivitiesPage;
use crate::state::{banner::BannerState, catalog::CatalogState, signup::SignupForm};

/// Root application component.
///
/// Provides configuration and all shared state contexts, then renders the
/// single activities page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    log::debug!("client config: {config:?}");

    provide_context(config);
    provide_context(RwSignal::new(CatalogState::default()));
    provide_context(RwSignal::new(BannerState::default()));
    provide_context(RwSignal::new(SignupForm::default()));

    view! {
        <Title text="Extracurricular Activities"/>
        <ActivitiesPage/>
    }
}
