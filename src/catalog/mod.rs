//! Catalog Domain Module
//!
//! This module contains the catalog side of the storefront:
//! - Query descriptors and response shapes
//! - The remote-fetching catalog client with its fallback pipeline
//! - The synthesized fallback catalog generator

pub mod client;
pub mod mock;
pub mod models;

// Re-export commonly used types for convenience
pub use client::{CatalogClient, SEARCH_ENDPOINT};
pub use mock::{CATEGORIES, MOCK_CATALOG_SIZE};
pub use models::{FetchParams, ProductResponse, DEFAULT_CATEGORY, DEFAULT_PAGE_SIZE};
