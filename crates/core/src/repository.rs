//! The product repository seam.
//!
//! Views fetch everything through this trait. The storefront implements it
//! over HTTP; tests implement it in memory.

use core::future::Future;

use crate::types::{Product, ProductId, SearchResult};

/// Read-only access to the remote product catalog.
pub trait ProductRepository: Send + Sync {
    /// Error returned by every operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the full catalog snapshot.
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, Self::Error>> + Send;

    /// Search products whose brand matches `brand`.
    ///
    /// A non-success response from the remote service is an error; callers
    /// decide how to present it.
    fn search_by_brand(
        &self,
        brand: &str,
    ) -> impl Future<Output = Result<Vec<SearchResult>, Self::Error>> + Send;

    /// Fetch a single product. `Ok(None)` when it does not exist.
    fn get_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, Self::Error>> + Send;
}
