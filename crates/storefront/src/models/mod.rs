//! Session-stored state.
//!
//! Per-visitor UI state lives in the session under the keys below. Each
//! value is a `lapgalaxy_core` type; this module only knows how to load and
//! store them.

pub mod session;

pub use session::keys as session_keys;
