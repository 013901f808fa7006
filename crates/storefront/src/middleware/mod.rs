//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`)
//! 2. `TraceLayer` (request tracing span)
//! 3. Request ID (recorded on the span and the Sentry scope)
//! 4. Security headers (CSP, frame and referrer policies)
//! 5. Session layer (tower-sessions with the moka-backed store)

pub mod auth;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{CurrentAuth, log_in, log_out};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
