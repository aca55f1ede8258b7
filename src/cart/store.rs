//! Persistent Cart Store
//!
//! This module manages durable cart state behind an injected [`Storage`]
//! backend and notifies in-process subscribers after every successful write.
//!
//! All operations are synchronous and none of them fail from the caller's
//! perspective: corrupt persisted data degrades to an empty or filtered
//! list, and write failures are logged while the in-memory intent of the
//! write is dropped.

use super::models::{CartItem, Product};
use super::storage::Storage;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Fixed key the serialized cart lives under.
pub const CART_KEY: &str = "agrimart_cart";

type Callback = Arc<dyn Fn() + Send + Sync>;
type SubscriberList = Arc<Mutex<Vec<(u64, Callback)>>>;

// =============================================================================
// Cart Store
// =============================================================================

/// The sole owner and durable home of cart state.
///
/// Pages hold only transient read-copies refreshed on notification; every
/// accessor here re-reads the persisted blob so callers never observe stale
/// cached state.
pub struct CartStore {
    storage: Arc<dyn Storage>,
    subscribers: SubscriberList,
    next_token: AtomicU64,
}

impl CartStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            subscribers: Arc::new(Mutex::new(Vec::new())),
            next_token: AtomicU64::new(1),
        }
    }

    /// Returns the current persisted cart.
    ///
    /// Missing key, invalid JSON, or a non-array payload all yield an empty
    /// list; individually malformed entries (id not a string, quantity not a
    /// number) are filtered out without discarding the rest.
    pub fn get(&self) -> Vec<CartItem> {
        let Some(raw) = self.storage.read(CART_KEY) else {
            return Vec::new();
        };
        let Ok(parsed) = serde_json::from_str::<Value>(&raw) else {
            return Vec::new();
        };
        let Value::Array(entries) = parsed else {
            return Vec::new();
        };
        entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect()
    }

    /// Overwrites the full persisted list, then notifies subscribers.
    ///
    /// On a write failure the error is logged and no notification is sent;
    /// the next `get()` reflects the previously persisted state.
    pub fn set(&self, items: &[CartItem]) {
        let payload = match serde_json::to_string(items) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "failed to serialize cart");
                return;
            }
        };
        if let Err(err) = self.storage.write(CART_KEY, &payload) {
            warn!(error = %err, "failed to save cart");
            return;
        }
        self.notify();
    }

    /// Adds `product` to the cart.
    ///
    /// An existing entry with the same id is rebuilt from the passed-in
    /// product with its quantity incremented by 1, so price and display
    /// fields refresh; otherwise a new entry is appended with quantity
    /// `product.quantity` or 1. Triggers exactly one `set`.
    pub fn add_item(&self, product: &Product) {
        let mut items = self.get();
        match items.iter_mut().find(|item| item.id == product.id) {
            Some(existing) => {
                *existing = CartItem::from_product(product, existing.quantity + 1);
            }
            None => {
                let quantity = product.quantity.unwrap_or(1);
                items.push(CartItem::from_product(product, quantity));
            }
        }
        self.set(&items);
    }

    /// Sets the quantity for `id`, clamped to a minimum of 1.
    ///
    /// An unknown id leaves the list unchanged but still re-persists and
    /// re-broadcasts, keeping the one-write-one-notification contract.
    pub fn update_quantity(&self, id: &str, quantity: i64) {
        let next = quantity.clamp(1, i64::from(u32::MAX)) as u32;
        let items: Vec<CartItem> = self
            .get()
            .into_iter()
            .map(|mut item| {
                if item.id == id {
                    item.quantity = next;
                }
                item
            })
            .collect();
        self.set(&items);
    }

    /// Removes the entry with `id`; silently a no-op when absent.
    pub fn remove_item(&self, id: &str) {
        let items: Vec<CartItem> = self.get().into_iter().filter(|item| item.id != id).collect();
        self.set(&items);
    }

    /// Empties the cart.
    pub fn clear(&self) {
        self.set(&[]);
    }

    /// Sum of quantities, recomputed from persisted state.
    pub fn total_items(&self) -> u32 {
        self.get().iter().map(|item| item.quantity).sum()
    }

    /// Sum of price x quantity, recomputed from persisted state.
    pub fn total_price(&self) -> u64 {
        self.get()
            .iter()
            .map(|item| u64::from(item.price) * u64::from(item.quantity))
            .sum()
    }

    /// Registers `callback` to run after every successful cart write.
    ///
    /// Callbacks run synchronously in registration order. The returned
    /// [`Subscription`] deregisters on drop.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        let token = self.next_token.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .lock()
            .expect("subscriber list poisoned")
            .push((token, Arc::new(callback)));
        Subscription {
            token,
            subscribers: Arc::clone(&self.subscribers),
        }
    }

    fn notify(&self) {
        // Snapshot under the lock, invoke outside it, so callbacks may call
        // back into the store (including subscribe) without deadlocking.
        let callbacks: Vec<Callback> = self
            .subscribers
            .lock()
            .expect("subscriber list poisoned")
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

/// Subscription guard returned by [`CartStore::subscribe`].
pub struct Subscription {
    token: u64,
    subscribers: SubscriberList,
}

impl Subscription {
    /// Deregisters the callback immediately.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.subscribers
            .lock()
            .expect("subscriber list poisoned")
            .retain(|(token, _)| *token != self.token);
    }
}
