//! Catalog shelves: products grouped by category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ProductRepository;
use crate::types::Product;

/// Pixels a shelf moves per scroll control press.
pub const SCROLL_STEP_PX: i64 = 300;

/// Width of one tile plus the gap after it.
pub const TILE_STRIDE_PX: i64 = 274;

/// A horizontally scrollable strip of products sharing a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shelf {
    pub category: String,
    pub products: Vec<Product>,
}

impl Shelf {
    /// Largest scroll offset that still shows the last tile.
    #[must_use]
    pub fn max_scroll(&self) -> i64 {
        max_scroll_for(self.products.len())
    }
}

/// Largest scroll offset for a shelf of `tile_count` tiles.
#[must_use]
pub fn max_scroll_for(tile_count: usize) -> i64 {
    let hidden = i64::try_from(tile_count.saturating_sub(1)).unwrap_or(i64::MAX);
    hidden.saturating_mul(TILE_STRIDE_PX)
}

/// Group products into shelves, one per category in first-seen order.
///
/// Every product lands on exactly one shelf.
#[must_use]
pub fn group_by_category(products: &[Product]) -> Vec<Shelf> {
    let mut shelves: Vec<Shelf> = Vec::new();
    for product in products {
        match shelves
            .iter_mut()
            .find(|shelf| shelf.category == product.category)
        {
            Some(shelf) => shelf.products.push(product.clone()),
            None => shelves.push(Shelf {
                category: product.category.clone(),
                products: vec![product.clone()],
            }),
        }
    }
    shelves
}

/// The catalog view's fetched snapshot.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    products: Vec<Product>,
}

impl CatalogView {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Fetch the catalog once. Failures leave the catalog empty.
    pub async fn load<R: ProductRepository>(repo: &R) -> Self {
        match repo.list_products().await {
            Ok(products) => Self::new(products),
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching products");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn shelves(&self) -> Vec<Shelf> {
        group_by_category(&self.products)
    }

    /// Shelves whose category name contains `keyword`, ignoring case.
    #[must_use]
    pub fn shelves_matching(&self, keyword: &str) -> Vec<Shelf> {
        let keyword = keyword.to_lowercase();
        self.shelves()
            .into_iter()
            .filter(|shelf| shelf.category.to_lowercase().contains(&keyword))
            .collect()
    }

    /// The shelf for exactly `category`.
    #[must_use]
    pub fn shelf(&self, category: &str) -> Option<Shelf> {
        self.shelves()
            .into_iter()
            .find(|shelf| shelf.category == category)
    }
}

/// Scroll control direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    #[must_use]
    pub const fn delta(self) -> i64 {
        match self {
            Self::Left => -SCROLL_STEP_PX,
            Self::Right => SCROLL_STEP_PX,
        }
    }
}

/// Horizontal scroll offset per shelf, keyed by category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfScroll {
    offsets: BTreeMap<String, i64>,
}

impl ShelfScroll {
    #[must_use]
    pub fn offset(&self, category: &str) -> i64 {
        self.offsets.get(category).copied().unwrap_or(0)
    }

    /// Record where the strip actually sits, clamped to `0..=max`.
    ///
    /// The browser can be scrolled without the controls, and a wide
    /// viewport stops short of the tile-based bound.
    pub fn sync(&mut self, category: &str, position: i64, max: i64) {
        self.offsets
            .insert(category.to_string(), position.clamp(0, max.max(0)));
    }

    /// Shift a shelf by `delta` pixels, clamped to `0..=max`. Returns the new offset.
    pub fn scroll_by(&mut self, category: &str, delta: i64, max: i64) -> i64 {
        let next = self
            .offset(category)
            .saturating_add(delta)
            .clamp(0, max.max(0));
        self.offsets.insert(category.to_string(), next);
        next
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::repository::memory::MemoryRepository;
    use crate::types::product::fixtures::product;

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Zenbook", "Laptops"),
            product(2, "Legion", "Gaming"),
            product(3, "MX Master", "Accessories"),
            product(4, "ThinkPad", "Laptops"),
            product(5, "ROG Strix", "Gaming"),
        ]
    }

    #[test]
    fn test_group_preserves_first_seen_order() {
        let shelves = group_by_category(&catalog());
        let categories: Vec<_> = shelves.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, ["Laptops", "Gaming", "Accessories"]);
    }

    #[test]
    fn test_group_covers_every_product_once() {
        let products = catalog();
        let shelves = group_by_category(&products);

        let mut seen = HashSet::new();
        for shelf in &shelves {
            for p in &shelf.products {
                assert_eq!(p.category, shelf.category);
                assert!(seen.insert(p.id), "product {} duplicated", p.id);
            }
        }
        let all: HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn test_group_empty_catalog() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_shelves_matching_ignores_case() {
        let view = CatalogView::new(catalog());
        let shelves = view.shelves_matching("laptop");
        assert_eq!(shelves.len(), 1);
        assert_eq!(shelves[0].products.len(), 2);
        assert!(view.shelves_matching("printers").is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_leaves_catalog_empty() {
        let repo = MemoryRepository::failing("connection refused");
        let view = CatalogView::load(&repo).await;
        assert!(view.products().is_empty());
        assert_eq!(repo.request_count(), 1);
    }

    #[tokio::test]
    async fn test_load_success() {
        let repo = MemoryRepository::with_products(catalog());
        let view = CatalogView::load(&repo).await;
        assert_eq!(view.products().len(), 5);
        assert_eq!(view.shelf("Gaming").map(|s| s.products.len()), Some(2));
    }

    #[test]
    fn test_scroll_by_clamps_to_bounds() {
        let mut scroll = ShelfScroll::default();
        assert_eq!(scroll.scroll_by("Laptops", ScrollDirection::Left.delta(), 900), 0);
        assert_eq!(scroll.scroll_by("Laptops", ScrollDirection::Right.delta(), 900), 300);
        assert_eq!(scroll.scroll_by("Laptops", ScrollDirection::Right.delta(), 900), 600);
        assert_eq!(scroll.scroll_by("Laptops", ScrollDirection::Right.delta(), 900), 900);
        assert_eq!(scroll.scroll_by("Laptops", ScrollDirection::Right.delta(), 900), 900);
        assert_eq!(scroll.offset("Gaming"), 0);
    }

    #[test]
    fn test_scroll_is_per_category() {
        let mut scroll = ShelfScroll::default();
        scroll.scroll_by("Laptops", 300, 1000);
        scroll.scroll_by("Gaming", 300, 1000);
        scroll.scroll_by("Gaming", 300, 1000);
        assert_eq!(scroll.offset("Laptops"), 300);
        assert_eq!(scroll.offset("Gaming"), 600);
    }

    #[test]
    fn test_left_after_overshoot_moves_back() {
        // Four tiles in a viewport that only hides 272px of the strip.
        let mut scroll = ShelfScroll::default();
        let visible_max = 272;
        let presses = [
            ScrollDirection::Right,
            ScrollDirection::Right,
            ScrollDirection::Right,
            ScrollDirection::Left,
        ];
        let offsets: Vec<_> = presses
            .iter()
            .map(|d| scroll.scroll_by("Laptops", d.delta(), visible_max))
            .collect();
        assert_eq!(offsets, [272, 272, 272, 0]);
    }

    #[test]
    fn test_sync_moves_from_actual_position() {
        let mut scroll = ShelfScroll::default();
        scroll.sync("Laptops", 120, 822);
        assert_eq!(scroll.scroll_by("Laptops", ScrollDirection::Right.delta(), 822), 420);

        scroll.sync("Laptops", 5000, 822);
        assert_eq!(scroll.offset("Laptops"), 822);
        scroll.sync("Laptops", -40, 822);
        assert_eq!(scroll.offset("Laptops"), 0);
    }

    #[test]
    fn test_max_scroll_single_tile() {
        let shelf = Shelf {
            category: "Laptops".to_string(),
            products: vec![product(1, "Zenbook", "Laptops")],
        };
        assert_eq!(shelf.max_scroll(), 0);
        assert_eq!(max_scroll_for(0), 0);
        assert_eq!(max_scroll_for(4), 3 * TILE_STRIDE_PX);
    }
}
