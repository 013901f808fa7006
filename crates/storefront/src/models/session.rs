//! Typed access to session values.

use serde::{Serialize, de::DeserializeOwned};
use tower_sessions::Session;

use lapgalaxy_core::views::SearchLayout;

/// Session keys for UI state.
pub mod keys {
    use super::SearchLayout;

    /// Key for the login flag.
    pub const LOGGED_IN: &str = "isLoggedIn";

    /// Key for the visitor's cart lines.
    pub const CART: &str = "cart";

    /// Key for per-category shelf scroll offsets.
    pub const SHELF_SCROLL: &str = "shelf_scroll";

    /// Key for the chosen colour scheme.
    pub const THEME: &str = "theme";

    /// Key for the catalog snapshot behind the comparison page's selectors.
    pub const COMPARE_SNAPSHOT: &str = "compare_snapshot";

    /// Key for one header search widget's state.
    #[must_use]
    pub const fn search_widget(layout: SearchLayout) -> &'static str {
        match layout {
            SearchLayout::Desktop => "search_widget_desktop",
            SearchLayout::Mobile => "search_widget_mobile",
        }
    }
}

/// Load a value, falling back to its default when absent or unreadable.
pub async fn load<T>(session: &Session, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match session.get::<T>(key).await {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read session value");
            T::default()
        }
    }
}

/// Store a value.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn store<T>(
    session: &Session,
    key: &str,
    value: &T,
) -> Result<(), tower_sessions::session::Error>
where
    T: Serialize + Send + Sync,
{
    session.insert(key, value).await
}

/// Store a value, logging instead of failing.
///
/// For fragment handlers, where a lost UI state update is preferable to an
/// error response.
pub async fn store_or_warn<T>(session: &Session, key: &str, value: &T)
where
    T: Serialize + Send + Sync,
{
    if let Err(e) = store(session, key, value).await {
        tracing::warn!(key, error = %e, "Failed to save session value");
    }
}

/// Drop a value so the next load starts from its default.
pub async fn reset(session: &Session, key: &str) {
    if let Err(e) = session.remove_value(key).await {
        tracing::warn!(key, error = %e, "Failed to reset session value");
    }
}
