//! Cart line items.
//!
//! The cart itself belongs to the visitor session; these types only describe
//! what the cart summary renders.

use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::{Price, Product, ProductId};

/// One line in the cart.
///
/// Name, price and image are copied from the product when the line is added
/// so the summary renders without refetching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub name: String,
    pub image: Option<String>,
    pub unit_price: Price,
    pub quantity: NonZeroU32,
}

impl CartLineItem {
    /// Unit price times quantity. Never stored.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Ordered cart lines, one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    #[must_use]
    pub const fn new(lines: Vec<CartLineItem>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    /// Add one unit of `product`, merging with an existing line.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }

        self.lines.push(CartLineItem {
            product_id: product.id,
            name: product.name.clone(),
            image: product.image_src(),
            unit_price: product.price,
            quantity: NonZeroU32::MIN,
        });
    }

    /// Total number of units across all lines (the badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity.get()))
    }

    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLineItem::subtotal).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
