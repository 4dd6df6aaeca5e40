//! Network module for the external providers.
//!
//! IP-based geolocation and remote prayer timings retrieval. Each call
//! builds its own short-lived HTTP client; no connection is held
//! across calls.

pub mod geo;
pub mod timings;

pub(crate) const USER_AGENT: &str = concat!("tahajod/", env!("CARGO_PKG_VERSION"));
