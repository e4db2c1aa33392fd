//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`catalog`, `banner`, `signup`, `removal`) so
//! components can depend on small focused models. Every model is a plain
//! struct; pages wrap them in `RwSignal`s and provide them via context.

pub mod banner;
pub mod catalog;
pub mod removal;
pub mod signup;
