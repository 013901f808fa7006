//! Core types for LapGalaxy.
//!
//! This module provides type-safe wrappers for the catalog's domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{Cart, CartLineItem};
pub use id::*;
pub use price::Price;
pub use product::{Availability, Product, ProductImage, SearchResult};
