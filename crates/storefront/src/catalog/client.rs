//! HTTP implementation of [`ProductRepository`].

use std::sync::Arc;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use lapgalaxy_core::{Product, ProductId, ProductRepository, SearchResult};

use super::RepositoryError;
use super::cache::{CacheKey, CacheValue};
use super::conversions::{convert_product, convert_search_result};
use super::types::{ApiProduct, ApiSearchResult};
use crate::config::ProductApiConfig;

/// Longest response excerpt kept in logs and errors.
const BODY_EXCERPT_CHARS: usize = 200;

/// Client for the product API.
///
/// Cheap to clone. When a cache TTL is configured, the catalog snapshot and
/// single-product lookups are cached; searches never are.
#[derive(Clone)]
pub struct HttpProductRepository {
    inner: Arc<HttpProductRepositoryInner>,
}

struct HttpProductRepositoryInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Option<Cache<CacheKey, CacheValue>>,
}

impl HttpProductRepository {
    /// Create a new product API client.
    #[must_use]
    pub fn new(config: &ProductApiConfig) -> Self {
        let cache = config.cache_ttl.map(|ttl| {
            Cache::builder()
                .max_capacity(1000)
                .time_to_live(ttl)
                .build()
        });

        Self {
            inner: Arc::new(HttpProductRepositoryInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                cache,
            }),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, RepositoryError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// GET `url` and decode the JSON body.
    ///
    /// Returns `Ok(None)` on 404 so lookups can distinguish "missing" from
    /// "broken".
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, RepositoryError> {
        let response = self
            .inner
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            let excerpt: String = body.chars().take(BODY_EXCERPT_CHARS).collect();
            tracing::error!(
                status = %status,
                body = %excerpt,
                "Product API returned non-success status"
            );
            return Err(RepositoryError::Status {
                status: status.as_u16(),
                body: excerpt,
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(BODY_EXCERPT_CHARS).collect::<String>(),
                    "Failed to parse product API response"
                );
                Err(RepositoryError::Parse(e))
            }
        }
    }

    async fn cached(&self, key: CacheKey) -> Option<CacheValue> {
        match &self.inner.cache {
            Some(cache) => cache.get(&key).await,
            None => None,
        }
    }

    async fn remember(&self, key: CacheKey, value: CacheValue) {
        if let Some(cache) = &self.inner.cache {
            cache.insert(key, value).await;
        }
    }

    /// Check that the product API answers the catalog endpoint.
    #[instrument(skip(self))]
    pub async fn is_reachable(&self) -> bool {
        let Ok(url) = self.endpoint("api/product/products") else {
            return false;
        };
        match self.inner.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(error = %e, "Product API unreachable");
                false
            }
        }
    }
}

impl ProductRepository for HttpProductRepository {
    type Error = RepositoryError;

    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        if let Some(CacheValue::Products(products)) = self.cached(CacheKey::Products).await {
            debug!("Cache hit for catalog");
            return Ok(products);
        }

        let url = self.endpoint("api/product/products")?;
        let products: Vec<Product> = self
            .get_json::<Vec<ApiProduct>>(url)
            .await?
            .unwrap_or_default()
            .into_iter()
            .map(convert_product)
            .collect();

        self.remember(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn search_by_brand(&self, brand: &str) -> Result<Vec<SearchResult>, RepositoryError> {
        let mut url = self.endpoint("api/product/search")?;
        url.query_pairs_mut().append_pair("brand", brand);

        // A 404 from search means "no such brand", not a broken service.
        let results = self
            .get_json::<Vec<ApiSearchResult>>(url)
            .await?
            .unwrap_or_default();

        Ok(results.into_iter().map(convert_search_result).collect())
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let key = CacheKey::Product(id);
        if let Some(CacheValue::Product(product)) = self.cached(key).await {
            debug!("Cache hit for product");
            return Ok(Some(*product));
        }

        let url = self.endpoint(&format!("api/product/{id}"))?;
        let Some(api) = self.get_json::<ApiProduct>(url).await? else {
            return Ok(None);
        };

        let product = convert_product(api);
        self.remember(key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(Some(product))
    }
}
