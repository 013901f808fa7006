//! Catalog product records.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// Stock label the product API uses for available items.
pub const IN_STOCK_LABEL: &str = "In Stock";

/// Stock label rendered for unavailable items.
pub const OUT_OF_STOCK_LABEL: &str = "Out of Stock";

/// MIME type assumed when the product API omits one.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// A product from the catalog snapshot.
///
/// Owned by the product API; the storefront only holds read-only copies for
/// the duration of a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    /// Free-text grouping key for catalog shelves.
    pub category: String,
    pub price: Price,
    pub availability: Availability,
    pub description: String,
    pub image: Option<ProductImage>,
}

impl Product {
    /// Data URI for the product image, if it has one.
    #[must_use]
    pub fn image_src(&self) -> Option<String> {
        self.image.as_ref().map(ProductImage::data_uri)
    }
}

/// Availability as reported by the product API.
///
/// The API has shipped both a boolean and a free-text label for this field,
/// so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Availability {
    Flag(bool),
    Label(String),
}

impl Availability {
    /// Whether the product can be bought.
    ///
    /// A label counts as available only when it reads "In Stock".
    #[must_use]
    pub fn is_available(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Label(label) => label.trim().eq_ignore_ascii_case(IN_STOCK_LABEL),
        }
    }

    /// Label shown on catalog tiles.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Label(label) => label,
            Self::Flag(true) => IN_STOCK_LABEL,
            Self::Flag(false) => OUT_OF_STOCK_LABEL,
        }
    }

    /// "Yes"/"No" answer shown on comparison panels.
    #[must_use]
    pub fn yes_no(&self) -> &'static str {
        if self.is_available() { "Yes" } else { "No" }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Self::Flag(false)
    }
}

/// An inline product image: base64 payload plus MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub base64: String,
    pub mime_type: String,
}

impl ProductImage {
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// Reduced product projection returned by brand search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image_url: Option<String>,
}
