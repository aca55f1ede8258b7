//! Agrimart Storefront Core
//!
//! This library provides the client-side core of an agricultural
//! marketplace storefront: a durable cart store with change notifications,
//! a catalog accessor with a synthesized fallback catalog, and the thin
//! page layer composing the two.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod pages;

// Infrastructure
pub mod router;
