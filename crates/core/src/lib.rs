//! LapGalaxy Core - Shared types library.
//!
//! This crate provides the domain types and view state used by the storefront:
//!
//! - [`types`] - Products, prices, cart lines and search results
//! - [`repository`] - The [`ProductRepository`] trait the views fetch through
//! - [`views`] - Per-view UI state (catalog shelves, comparison slots,
//!   search widget, cart summary, auth session)
//! - [`route`] - The navigation surface shared by every view
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure state transitions - no
//! HTTP clients and no sessions. Fetches go through [`ProductRepository`],
//! which the storefront implements over HTTP and tests implement in memory.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod repository;
pub mod route;
pub mod types;
pub mod views;

pub use repository::ProductRepository;
pub use route::Route;
pub use types::*;
