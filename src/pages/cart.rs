//! Cart Page
//!
//! A transient read-copy of the cart refreshed on every store notification,
//! plus the mutations the line-item view exposes.

use crate::cart::{CartItem, CartStore, Subscription};
use crate::router::{AppPath, Navigator};
use std::sync::{Arc, Mutex};

pub struct CartPage {
    cart: Arc<CartStore>,
    items: Arc<Mutex<Vec<CartItem>>>,
    _sub: Subscription,
}

impl CartPage {
    pub fn new(cart: Arc<CartStore>) -> Arc<Self> {
        let items = Arc::new(Mutex::new(cart.get()));
        let sub = cart.subscribe({
            let cart = Arc::clone(&cart);
            let items = Arc::clone(&items);
            move || *items.lock().expect("cart page items poisoned") = cart.get()
        });
        Arc::new(Self {
            cart,
            items,
            _sub: sub,
        })
    }

    /// Current line items (snapshot refreshed on store notification).
    pub fn items(&self) -> Vec<CartItem> {
        self.items.lock().expect("cart page items poisoned").clone()
    }

    pub fn set_quantity(&self, id: &str, quantity: i64) {
        self.cart.update_quantity(id, quantity);
    }

    pub fn remove(&self, id: &str) {
        self.cart.remove_item(id);
    }

    pub fn clear(&self) {
        self.cart.clear();
    }

    pub fn total_items(&self) -> u32 {
        self.cart.total_items()
    }

    pub fn total_price(&self) -> u64 {
        self.cart.total_price()
    }

    /// Empty-cart affordance: back to the catalog.
    pub fn continue_shopping(&self, nav: &dyn Navigator) {
        nav.navigate(AppPath::Products);
    }
}
