//! Activities page: catalog load, signup, and participant removal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every user action starts an independent request. When it finishes, a
//! `settle_*` function applies the outcome to plain state and reports what
//! the page still has to do (reload the catalog, schedule a banner hide).
//! The settle functions hold all flow rules; the component only moves
//! values between signals and the network.
//!
//! Requests are never cancelled. A request that finishes after the page
//! has moved on still settles against whatever state is current.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::activity_list::ActivityList;
use crate::components::message_banner::MessageBanner;
use crate::components::signup_panel::SignupPanel;
use crate::config::ClientConfig;
use crate::net::error::{ApiError, REMOVAL_FAILURE, SIGNUP_FAILURE};
use crate::net::types::{ApiMessage, Catalog};
use crate::state::banner::BannerState;
use crate::state::catalog::CatalogState;
use crate::state::removal::RemovalTarget;
use crate::state::signup::{MISSING_FIELDS_MESSAGE, SignupBlocked, SignupForm, SignupRequest};

/// A pending banner hide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoHide {
    pub generation: u64,
    pub after: Duration,
}

/// Follow-up work after a flow settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub reload: bool,
    pub auto_hide: Option<AutoHide>,
}

/// Install a fetched catalog, or switch the list to its failure message.
pub fn settle_catalog_load(catalog: &mut CatalogState, result: Result<Catalog, ApiError>) {
    match result {
        Ok(fresh) => {
            log::debug!("catalog loaded: {} activities", fresh.len());
            catalog.replace(fresh);
        }
        Err(e) => {
            log::error!("error fetching activities: {e}");
            catalog.mark_failed();
        }
    }
}

pub fn settle_blocked_signup(
    banner: &mut BannerState,
    blocked: SignupBlocked,
    config: &ClientConfig,
) -> Option<AutoHide> {
    match blocked {
        SignupBlocked::InFlight => None,
        SignupBlocked::MissingFields => Some(AutoHide {
            generation: banner.error(MISSING_FIELDS_MESSAGE),
            after: config.signup_message,
        }),
    }
}

/// Apply a finished signup request.
///
/// The submit control is re-enabled whatever the result. A success patches
/// the matching card in place, or asks for a reload when no card exists.
pub fn settle_signup(
    catalog: &mut CatalogState,
    banner: &mut BannerState,
    form: &mut SignupForm,
    request: &SignupRequest,
    result: Result<ApiMessage, ApiError>,
    config: &ClientConfig,
) -> Outcome {
    form.finish();
    match result {
        Ok(body) => {
            let generation = banner.success(body.message);
            form.reset();
            let reload = match catalog.apply_signup(&request.activity, &request.email) {
                Ok(()) => false,
                Err(e) => {
                    log::debug!("{e}; reloading catalog");
                    true
                }
            };
            Outcome { reload, auto_hide: Some(AutoHide { generation, after: config.signup_message }) }
        }
        Err(e) if e.is_server_reported() => {
            let generation = banner.error(e.user_message(SIGNUP_FAILURE));
            Outcome { reload: false, auto_hide: Some(AutoHide { generation, after: config.signup_message }) }
        }
        Err(e) => {
            log::error!("error signing up: {e}");
            banner.error(e.user_message(SIGNUP_FAILURE));
            Outcome::default()
        }
    }
}

/// Apply a finished removal request. Success always asks for a reload.
pub fn settle_removal(
    banner: &mut BannerState,
    result: Result<ApiMessage, ApiError>,
    config: &ClientConfig,
) -> Outcome {
    match result {
        Ok(body) => {
            let generation = banner.success(body.message);
            Outcome { reload: true, auto_hide: Some(AutoHide { generation, after: config.removal_message }) }
        }
        Err(e) => {
            if !e.is_server_reported() {
                log::error!("error removing participant: {e}");
            }
            banner.error(e.user_message(REMOVAL_FAILURE));
            Outcome::default()
        }
    }
}

/// Activities page with catalog, signup form, and status banner.
#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ClientConfig>());
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let banner = expect_context::<RwSignal<BannerState>>();
    let form = expect_context::<RwSignal<SignupForm>>();

    load_catalog(config, catalog);

    let on_submit = Callback::new(move |()| submit_signup(config, catalog, banner, form));
    let on_remove = Callback::new(move |target: RemovalTarget| request_removal(config, catalog, banner, target));

    view! {
        <header>
            <h1>"Extracurricular Activities"</h1>
        </header>
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList on_remove=on_remove/>
            </section>
            <section>
                <SignupPanel on_submit=on_submit/>
                <MessageBanner/>
            </section>
        </main>
    }
}

fn load_catalog(config: StoredValue<ClientConfig>, catalog: RwSignal<CatalogState>) {
    #[cfg(feature = "csr")]
    {
        let base = config.with_value(|c| c.api_base.clone());
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_activities(&base).await;
            catalog.update(|state| settle_catalog_load(state, result));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, catalog);
    }
}

fn submit_signup(
    config: StoredValue<ClientConfig>,
    catalog: RwSignal<CatalogState>,
    banner: RwSignal<BannerState>,
    form: RwSignal<SignupForm>,
) {
    let Some(begun) = form.try_update(SignupForm::begin) else {
        return;
    };
    let request = match begun {
        Ok(request) => request,
        Err(blocked) => {
            let cfg = config.get_value();
            let hide = banner.try_update(|b| settle_blocked_signup(b, blocked, &cfg)).flatten();
            schedule_hide(banner, hide);
            return;
        }
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let cfg = config.get_value();
        let result = crate::net::api::signup(&cfg.api_base, &request.activity, &request.email).await;
        let outcome = catalog
            .try_update(|c| {
                banner.try_update(|b| form.try_update(|f| settle_signup(c, b, f, &request, result, &cfg)))
            })
            .flatten()
            .flatten()
            .unwrap_or_default();
        schedule_hide(banner, outcome.auto_hide);
        if outcome.reload {
            load_catalog(config, catalog);
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (catalog, request);
        form.update(SignupForm::finish);
    }
}

/// Ask `ask` to confirm the removal and hand the target to `send` only if
/// the user agreed. A declined prompt returns `None` without calling `send`.
pub fn start_removal<T>(
    target: RemovalTarget,
    ask: impl FnOnce(&str) -> bool,
    send: impl FnOnce(RemovalTarget) -> T,
) -> Option<T> {
    target.confirmed_by(ask).map(send)
}

fn request_removal(
    config: StoredValue<ClientConfig>,
    catalog: RwSignal<CatalogState>,
    banner: RwSignal<BannerState>,
    target: RemovalTarget,
) {
    let started = start_removal(target, crate::util::dom::confirm, |target| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let cfg = config.get_value();
            let result = crate::net::api::remove_participant(&cfg.api_base, &target.activity, &target.email).await;
            let outcome = banner.try_update(|b| settle_removal(b, result, &cfg)).unwrap_or_default();
            schedule_hide(banner, outcome.auto_hide);
            if outcome.reload {
                load_catalog(config, catalog);
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (config, catalog, banner, target);
        }
    });
    if started.is_none() {
        log::debug!("removal declined");
    }
}

fn schedule_hide(banner: RwSignal<BannerState>, hide: Option<AutoHide>) {
    let Some(AutoHide { generation, after }) = hide else {
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(after).await;
        banner.update(|b| {
            b.hide_if_current(generation);
        });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (banner, generation, after);
    }
}
