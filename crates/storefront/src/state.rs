//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::HttpProductRepository;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the product API client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    products: HttpProductRepository,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let products = HttpProductRepository::new(&config.product_api);

        Self {
            inner: Arc::new(AppStateInner { config, products }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product API client.
    #[must_use]
    pub fn products(&self) -> &HttpProductRepository {
        &self.inner.products
    }
}
