//! View Composition Layer
//!
//! Thin page structs over the cart store and catalog client:
//! - The browse page with its debounced, last-request-wins refresh
//! - The cart page with its notification-refreshed line items
//!
//! Rendering, layout, and form validation stay outside this crate.

pub mod cart;
pub mod products;

pub use cart::CartPage;
pub use products::{ProductsPage, SEARCH_DEBOUNCE};
