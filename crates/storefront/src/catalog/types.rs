//! Wire types for the product API.
//!
//! The API is a Java service that emits camelCase JSON and is loose about
//! nulls, so every descriptive field is optional here and defaulted during
//! conversion.

use serde::Deserialize;

use lapgalaxy_core::{Availability, Price, ProductId};

/// A product record as returned by `/api/product/products` and `/api/product/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProduct {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub price: Price,
    #[serde(default)]
    pub product_available: Option<Availability>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub image_type: Option<String>,
}

/// A brand search hit as returned by `/api/product/search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSearchResult {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image_url: Option<String>,
}
