//! REST API helpers for the activities service.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Transport`] since these
//! endpoints are only meaningful in the browser.
//!
//! Path and query segments are percent-encoded with the same character set
//! as the browser's `encodeURIComponent`, so activity names with spaces or
//! ampersands and emails with `+` survive the trip.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::error::ApiError;
#[cfg(any(test, feature = "csr"))]
use super::types::ApiErrorBody;
use super::types::{ApiMessage, Catalog};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
#[cfg(any(test, feature = "csr"))]
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[cfg(any(test, feature = "csr"))]
fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

#[cfg(any(test, feature = "csr"))]
fn activities_endpoint(base: &str) -> String {
    format!("{base}/activities")
}

#[cfg(any(test, feature = "csr"))]
fn signup_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

#[cfg(any(test, feature = "csr"))]
fn participants_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/participants?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Transport("not available outside the browser".to_owned())
}

/// Classify a non-2xx body. A body that is not JSON at all counts as
/// unreadable; JSON without a string `detail` is a bare rejection.
#[cfg(any(test, feature = "csr"))]
fn rejection_from_body(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            let detail = ApiErrorBody { detail: value.get("detail").cloned() }.detail_text();
            ApiError::Rejected { status, detail }
        }
        Err(e) => ApiError::Decode(format!("status {status}: {e}")),
    }
}

#[cfg(feature = "csr")]
async fn rejected(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    match resp.text().await {
        Ok(body) => rejection_from_body(status, &body),
        Err(e) => ApiError::Transport(e.to_string()),
    }
}

#[cfg(feature = "csr")]
async fn send_for_message(request: gloo_net::http::RequestBuilder) -> Result<ApiMessage, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(rejected(resp).await);
    }
    resp.json::<ApiMessage>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the full catalog from `GET /activities`.
///
/// # Errors
///
/// Any non-2xx status is a failure, as is a body that is not a catalog.
pub async fn fetch_activities(base: &str) -> Result<Catalog, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&activities_endpoint(base))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(rejected(resp).await);
        }
        resp.json::<Catalog>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = base;
        Err(unavailable())
    }
}

/// Sign `email` up for `activity` via `POST /activities/{name}/signup`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the server's detail on non-2xx.
pub async fn signup(base: &str, activity: &str, email: &str) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = signup_endpoint(base, activity, email);
        send_for_message(gloo_net::http::Request::post(&url)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, activity, email);
        Err(unavailable())
    }
}

/// Remove `email` from `activity` via `DELETE /activities/{name}/participants`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the server's detail on non-2xx.
pub async fn remove_participant(base: &str, activity: &str, email: &str) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = participants_endpoint(base, activity, email);
        send_for_message(gloo_net::http::Request::delete(&url)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, activity, email);
        Err(unavailable())
    }
}
