//! Cart Domain Module
//!
//! This module contains the persistent cart side of the storefront:
//! - Domain models (Product, CartItem)
//! - Storage backends (in-memory, file-backed)
//! - The cart store with its subscription bus

pub mod models;
pub mod storage;
pub mod store;

// Re-export commonly used types for convenience
pub use models::{CartItem, Product};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{CartStore, Subscription, CART_KEY};
