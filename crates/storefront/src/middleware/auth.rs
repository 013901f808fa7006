//! Login flag extractor and helpers.
//!
//! The login flag is the only authentication state the storefront keeps. It
//! is read here into an [`AuthSession`] and handed to the header explicitly;
//! only [`log_in`] and [`log_out`] write it.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use lapgalaxy_core::views::AuthSession;

use crate::models::session_keys;

/// Extractor for the visitor's login state. Never rejects.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CurrentAuth(auth): CurrentAuth) -> impl IntoResponse {
///     if auth.logged_in { "Welcome back" } else { "Hello, guest" }
/// }
/// ```
pub struct CurrentAuth(pub AuthSession);

impl<S> FromRequestParts<S> for CurrentAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let logged_in = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<bool>(session_keys::LOGGED_IN)
                .await
                .ok()
                .flatten()
                .unwrap_or(false),
            None => false,
        };

        Ok(Self(AuthSession { logged_in }))
    }
}

/// Set the login flag.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn log_in(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::LOGGED_IN, true).await
}

/// Clear the login flag.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn log_out(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<bool>(session_keys::LOGGED_IN).await?;
    Ok(())
}
