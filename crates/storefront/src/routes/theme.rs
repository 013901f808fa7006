//! Colour scheme toggle.

use axum::{
    http::{HeaderMap, header::REFERER},
    response::Redirect,
};
use tower_sessions::Session;
use tracing::instrument;
use url::Url;

use lapgalaxy_core::Route;
use lapgalaxy_core::views::Theme;

use crate::error::Result;
use crate::models::{session, session_keys};

/// Path and query of the page the toggle was pressed on.
///
/// Only the path is kept, so the redirect never leaves the storefront.
fn return_path(headers: &HeaderMap) -> String {
    headers
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|referer| Url::parse(referer).ok())
        .map_or_else(
            || Route::Home.path(),
            |url| match url.query() {
                Some(query) => format!("{}?{query}", url.path()),
                None => url.path().to_string(),
            },
        )
}

/// Switch between light and dark, then reload the current page.
#[instrument(skip(session, headers))]
pub async fn toggle(session: Session, headers: HeaderMap) -> Result<Redirect> {
    let theme: Theme = session::load(&session, session_keys::THEME).await;
    session::store(&session, session_keys::THEME, &theme.toggled()).await?;
    Ok(Redirect::to(&return_path(&headers)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn referer(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_return_path_keeps_path_and_query() {
        let headers = referer("http://localhost:3000/compare?left=1&right=2");
        assert_eq!(return_path(&headers), "/compare?left=1&right=2");
    }

    #[test]
    fn test_return_path_drops_foreign_host() {
        let headers = referer("https://elsewhere.example/laptops");
        assert_eq!(return_path(&headers), "/laptops");
    }

    #[test]
    fn test_return_path_defaults_home() {
        assert_eq!(return_path(&HeaderMap::new()), "/");
        assert_eq!(return_path(&referer("not a url")), "/");
    }
}
