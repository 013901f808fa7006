//! Side-by-side comparison of two products.

use serde::{Deserialize, Serialize};

use crate::ProductRepository;
use crate::types::{Product, ProductId};

/// One of the two comparison selection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
}

impl Slot {
    /// 1-based slot number used in markup and query strings.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

/// Comparison view state: the catalog snapshot plus two independent slots.
#[derive(Debug, Clone, Default)]
pub struct ComparisonView {
    products: Vec<Product>,
    first: Option<Product>,
    second: Option<Product>,
}

impl ComparisonView {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            first: None,
            second: None,
        }
    }

    /// Fetch the catalog once. Failures leave both selectors empty.
    pub async fn load<R: ProductRepository>(repo: &R) -> Self {
        match repo.list_products().await {
            Ok(products) => Self::new(products),
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching products for comparison");
                Self::default()
            }
        }
    }

    /// Products offered by both selectors.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Put the product with `id` into `slot`.
    ///
    /// `None` or an id missing from the snapshot empties the slot. The other
    /// slot is never touched, so both may hold the same product.
    pub fn select(&mut self, slot: Slot, id: Option<ProductId>) {
        let product = id.and_then(|id| self.products.iter().find(|p| p.id == id).cloned());
        match slot {
            Slot::First => self.first = product,
            Slot::Second => self.second = product,
        }
    }

    #[must_use]
    pub const fn selected(&self, slot: Slot) -> Option<&Product> {
        match slot {
            Slot::First => self.first.as_ref(),
            Slot::Second => self.second.as_ref(),
        }
    }
}
