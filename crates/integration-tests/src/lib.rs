//! Integration tests for the LapGalaxy storefront.
//!
//! Each test starts a fake product API and a storefront instance on
//! ephemeral ports, then drives the storefront over HTTP with a cookie-aware
//! client, so the session behaves as it would in a browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lapgalaxy-integration-tests
//! ```

#![allow(clippy::expect_used, clippy::missing_panics_doc)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use reqwest::Client;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use url::Url;

use lapgalaxy_storefront::config::{ProductApiConfig, StorefrontConfig};
use lapgalaxy_storefront::routes;
use lapgalaxy_storefront::state::AppState;

/// Brand the fake API answers with a server error.
pub const BROKEN_BRAND: &str = "Broken";

/// A 1x1 transparent PNG.
pub const PIXEL_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// The catalog the fake product API serves by default.
#[must_use]
pub fn sample_catalog() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Zenbook 14 OLED",
            "brand": "Asus",
            "category": "Laptops",
            "price": 320000,
            "productAvailable": "In Stock",
            "description": "14-inch OLED, Core Ultra 7",
            "imageBase64": PIXEL_PNG_BASE64,
            "imageType": "image/png"
        }),
        json!({
            "id": 2,
            "name": "ROG Strix G16",
            "brand": "Asus",
            "category": "Gaming Laptops",
            "price": 610000,
            "productAvailable": true,
            "description": "RTX 4070, 240Hz"
        }),
        json!({
            "id": 3,
            "name": "MX Master 3S",
            "brand": "Logitech",
            "category": "Accessories",
            "price": 32000,
            "productAvailable": "Out of Stock",
            "description": "Wireless mouse"
        }),
        json!({
            "id": 4,
            "name": "ThinkPad X1 Carbon",
            "brand": "Lenovo",
            "category": "Laptops",
            "price": 540000,
            "productAvailable": "In Stock",
            "description": "Gen 12, 32GB RAM"
        }),
    ]
}

#[derive(Clone)]
struct FakeApiState {
    products: Arc<Vec<Value>>,
    failing: bool,
    catalog_requests: Arc<AtomicUsize>,
    search_requests: Arc<AtomicUsize>,
}

/// A stand-in for the product API.
pub struct FakeProductApi {
    pub url: Url,
    catalog_requests: Arc<AtomicUsize>,
    search_requests: Arc<AtomicUsize>,
}

impl FakeProductApi {
    /// Serve `products`; every endpoint fails with 503 when `failing` is set.
    pub async fn start(products: Vec<Value>, failing: bool) -> Self {
        let catalog_requests = Arc::new(AtomicUsize::new(0));
        let search_requests = Arc::new(AtomicUsize::new(0));
        let state = FakeApiState {
            products: Arc::new(products),
            failing,
            catalog_requests: Arc::clone(&catalog_requests),
            search_requests: Arc::clone(&search_requests),
        };

        let app = Router::new()
            .route("/api/product/products", get(list_products))
            .route("/api/product/search", get(search))
            .route("/api/product/{id}", get(get_product))
            .with_state(state);

        let addr = serve(app).await;
        let url = Url::parse(&format!("http://{addr}/")).expect("fake API URL");

        Self {
            url,
            catalog_requests,
            search_requests,
        }
    }

    /// Number of full catalog fetches received so far.
    #[must_use]
    pub fn catalog_requests(&self) -> usize {
        self.catalog_requests.load(Ordering::SeqCst)
    }

    /// Number of brand searches received so far.
    #[must_use]
    pub fn search_requests(&self) -> usize {
        self.search_requests.load(Ordering::SeqCst)
    }
}

async fn list_products(State(state): State<FakeApiState>) -> Response {
    state.catalog_requests.fetch_add(1, Ordering::SeqCst);
    if state.failing {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(state.products.as_ref().clone()).into_response()
}

async fn search(
    State(state): State<FakeApiState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.search_requests.fetch_add(1, Ordering::SeqCst);
    let brand = params.get("brand").cloned().unwrap_or_default();
    if state.failing || brand == BROKEN_BRAND {
        return (StatusCode::INTERNAL_SERVER_ERROR, "search backend down").into_response();
    }

    let results: Vec<Value> = state
        .products
        .iter()
        .filter(|p| {
            p["brand"]
                .as_str()
                .is_some_and(|b| b.eq_ignore_ascii_case(&brand))
        })
        .map(|p| {
            json!({
                "id": p["id"],
                "name": p["name"],
                "price": p["price"],
                "imageUrl": format!("https://cdn.lapgalaxy.lk/products/{}.jpg", p["id"]),
            })
        })
        .collect();
    Json(results).into_response()
}

async fn get_product(State(state): State<FakeApiState>, Path(id): Path<i64>) -> Response {
    if state.failing {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    state
        .products
        .iter()
        .find(|p| p["id"].as_i64() == Some(id))
        .map_or_else(
            || StatusCode::NOT_FOUND.into_response(),
            |p| Json(p.clone()).into_response(),
        )
}

/// Bind an ephemeral port and serve `app` in the background.
async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    addr
}

/// A running storefront wired to a fake product API.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    pub api: FakeProductApi,
}

impl TestContext {
    /// Storefront backed by [`sample_catalog`].
    pub async fn new() -> Self {
        Self::with_api(FakeProductApi::start(sample_catalog(), false).await).await
    }

    /// Storefront whose product API fails every request.
    pub async fn with_failing_api() -> Self {
        Self::with_api(FakeProductApi::start(sample_catalog(), true).await).await
    }

    async fn with_api(api: FakeProductApi) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local address");
        let base_url = format!("http://{addr}");

        let config = StorefrontConfig {
            host: addr.ip(),
            port: addr.port(),
            base_url: base_url.clone(),
            product_api: ProductApiConfig {
                base_url: api.url.clone(),
                cache_ttl: None,
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };
        let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static");
        let app = routes::app(AppState::new(config), static_dir);
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("storefront server");
        });

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            api,
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `path` and return the status and body.
    pub async fn get(&self, path: &str) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request");
        let status = resp.status();
        (status, resp.text().await.expect("response body"))
    }

    /// GET `path` as HTMX would and return the status and body.
    pub async fn htmx_get(&self, path: &str) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .header("HX-Request", "true")
            .send()
            .await
            .expect("HTMX GET request");
        let status = resp.status();
        (status, resp.text().await.expect("response body"))
    }

    /// POST a form to `path`, optionally as HTMX would.
    pub async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
        htmx: bool,
    ) -> reqwest::Response {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form)
            .finish();
        let mut request = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body);
        if htmx {
            request = request.header("HX-Request", "true");
        }
        request.send().await.expect("POST request")
    }
}
