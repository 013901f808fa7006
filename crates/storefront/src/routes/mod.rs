//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Catalog (all shelves)
//! GET  /laptops                - Catalog restricted to laptop categories
//! GET  /gaming                 - Catalog restricted to gaming categories
//! GET  /accessories            - Catalog restricted to accessory categories
//! GET  /offers                 - Catalog (all shelves)
//! POST /catalog/scroll         - Shelf offset marker (HTMX)
//!
//! # Comparison
//! GET  /compare                - Comparison page (?left=&right=)
//! GET  /compare/slot           - One slot's detail panel (HTMX)
//!
//! # Header search (HTMX fragments)
//! GET  /search/suggest         - Run a brand search (?q=&layout=); full page without HTMX
//! POST /search/dismiss         - Hide the dropdown (?layout=)
//! GET  /search/select/:id      - Pick a result, redirect to its detail page
//!
//! # Products
//! GET  /product/:id            - Product detail
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (acknowledgement, triggers cart-updated)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Auth
//! GET  /login                  - Login page
//! GET  /register               - Register page
//! POST /auth/login             - Set the login flag
//! POST /auth/logout            - Clear the login flag
//!
//! # Theme
//! POST /theme/toggle           - Switch light/dark, back to the referring page
//!
//! # Operations
//! GET  /health                 - Liveness
//! GET  /health/ready           - Readiness (probes the product API)
//! GET  /static/*               - Static assets
//! ```

pub mod auth;
pub mod cart;
pub mod compare;
pub mod health;
pub mod home;
pub mod layout;
pub mod products;
pub mod search;
pub mod theme;

use std::path::Path;

use axum::{
    Router,
    http::{HeaderMap, Request},
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::{
    create_session_layer, request_id_middleware, security_headers_middleware,
};
use crate::state::AppState;

/// Whether the request came from HTMX rather than a plain form submission.
pub(crate) fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key("HX-Request")
}

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/laptops", get(home::laptops))
        .route("/gaming", get(home::gaming))
        .route("/accessories", get(home::accessories))
        .route("/offers", get(home::offers))
        .route("/catalog/scroll", post(home::scroll))
}

/// Create the comparison routes router.
pub fn compare_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(compare::show))
        .route("/slot", get(compare::slot))
}

/// Create the header search routes router.
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/suggest", get(search::suggest))
        .route("/dismiss", post(search::dismiss))
        .route("/select/{id}", get(search::select))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create all page and fragment routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(catalog_routes())
        .nest("/compare", compare_routes())
        .nest("/search", search_routes())
        .route("/product/{id}", get(products::show))
        .nest("/cart", cart_routes())
        .route("/login", get(auth::login_page))
        .route("/register", get(auth::register_page))
        .nest("/auth", auth_routes())
        .route("/theme/toggle", post(theme::toggle))
}

/// Build the complete application: routes, static assets and middleware.
///
/// Sentry layers are added by the binary on top of this.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let session_layer = create_session_layer(state.config());

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(session_layer)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_htmx() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));
        headers.insert("HX-Request", "true".parse().unwrap());
        assert!(is_htmx(&headers));
    }
}
