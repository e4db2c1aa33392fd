//! Networking modules for the activities REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoints and performs the HTTP calls, `error` classifies
//! failures into user-facing messages, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
