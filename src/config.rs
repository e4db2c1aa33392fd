//! Client configuration resolved from build-time environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is served as static files next to the API, so there is no
//! runtime environment to read. Values are captured with `option_env!` when
//! the crate is compiled and parsed once when the app mounts.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_SIGNUP_MESSAGE_MS: u64 = 5_000;
pub const DEFAULT_REMOVAL_MESSAGE_MS: u64 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid duration for {var}: {value}")]
    InvalidDuration { var: &'static str, value: String },
}

/// Typed client settings shared through Leptos context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined in front of every API path. Empty means same origin.
    pub api_base: String,
    /// How long a signup outcome stays on the banner.
    pub signup_message: Duration,
    /// How long a removal success stays on the banner.
    pub removal_message: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            signup_message: Duration::from_millis(DEFAULT_SIGNUP_MESSAGE_MS),
            removal_message: Duration::from_millis(DEFAULT_REMOVAL_MESSAGE_MS),
        }
    }
}

/// Raw, unparsed configuration values.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawConfig<'a> {
    pub api_base: Option<&'a str>,
    pub signup_message_ms: Option<&'a str>,
    pub removal_message_ms: Option<&'a str>,
}

impl RawConfig<'static> {
    /// Values baked in at compile time.
    ///
    /// - `ACTIVITIES_API_BASE`: default empty (same origin)
    /// - `ACTIVITIES_SIGNUP_MESSAGE_MS`: default 5000
    /// - `ACTIVITIES_REMOVAL_MESSAGE_MS`: default 4000
    pub fn from_build_env() -> Self {
        Self {
            api_base: option_env!("ACTIVITIES_API_BASE"),
            signup_message_ms: option_env!("ACTIVITIES_SIGNUP_MESSAGE_MS"),
            removal_message_ms: option_env!("ACTIVITIES_REMOVAL_MESSAGE_MS"),
        }
    }
}

impl ClientConfig {
    /// Strictly parse raw values; the first invalid one is an error.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the variable that failed to parse.
    pub fn parse(raw: RawConfig<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: normalize_base(raw.api_base.unwrap_or(DEFAULT_API_BASE)),
            signup_message: parse_millis(SIGNUP_VAR, raw.signup_message_ms, DEFAULT_SIGNUP_MESSAGE_MS)?,
            removal_message: parse_millis(REMOVAL_VAR, raw.removal_message_ms, DEFAULT_REMOVAL_MESSAGE_MS)?,
        })
    }

    /// Parse raw values, replacing each invalid one with its default.
    pub fn resolve(raw: RawConfig<'_>) -> Self {
        Self {
            api_base: normalize_base(raw.api_base.unwrap_or(DEFAULT_API_BASE)),
            signup_message: or_default(
                parse_millis(SIGNUP_VAR, raw.signup_message_ms, DEFAULT_SIGNUP_MESSAGE_MS),
                Duration::from_millis(DEFAULT_SIGNUP_MESSAGE_MS),
            ),
            removal_message: or_default(
                parse_millis(REMOVAL_VAR, raw.removal_message_ms, DEFAULT_REMOVAL_MESSAGE_MS),
                Duration::from_millis(DEFAULT_REMOVAL_MESSAGE_MS),
            ),
        }
    }

    /// Configuration baked into this build.
    pub fn from_build_env() -> Self {
        Self::resolve(RawConfig::from_build_env())
    }
}

const SIGNUP_VAR: &str = "ACTIVITIES_SIGNUP_MESSAGE_MS";
const REMOVAL_VAR: &str = "ACTIVITIES_REMOVAL_MESSAGE_MS";

fn or_default<T: std::fmt::Debug>(parsed: Result<T, ConfigError>, default: T) -> T {
    parsed.unwrap_or_else(|e| {
        log::warn!("{e}; using default {default:?}");
        default
    })
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_millis(var: &'static str, raw: Option<&str>, default: u64) -> Result<Duration, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(Duration::from_millis(default));
    };
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidDuration { var, value: value.to_owned() })
}
