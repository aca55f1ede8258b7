//! Product Browse Page
//!
//! Holds the active query descriptor (category, search text, page) and keeps
//! a product slice current against the catalog client. Descriptor changes
//! are debounced, and an in-flight fetch whose descriptor has been
//! superseded is discarded on arrival: each change bumps a generation
//! counter, and a refresh only applies its result while it is still the
//! newest generation (last-request-wins, advisory cancellation only).

use crate::cart::{CartStore, Product, Subscription};
use crate::catalog::{CatalogClient, FetchParams, DEFAULT_CATEGORY, DEFAULT_PAGE_SIZE};
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Quiet interval a descriptor change must survive before a fetch starts.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

struct BrowseState {
    category: String,
    query: String,
    page: u32,
    products: Vec<Product>,
    page_count: u32,
    loading: bool,
}

/// The catalog browsing page.
pub struct ProductsPage {
    catalog: Arc<CatalogClient>,
    cart: Arc<CartStore>,
    state: Mutex<BrowseState>,
    generation: AtomicU64,
    cart_count: Arc<AtomicU32>,
    _cart_sub: Subscription,
}

impl ProductsPage {
    /// Builds the page and schedules its initial catalog load.
    ///
    /// Must run inside a tokio runtime; refreshes are spawned tasks.
    pub fn new(catalog: Arc<CatalogClient>, cart: Arc<CartStore>) -> Arc<Self> {
        let cart_count = Arc::new(AtomicU32::new(cart.total_items()));
        let cart_sub = cart.subscribe({
            let cart = Arc::clone(&cart);
            let cart_count = Arc::clone(&cart_count);
            move || cart_count.store(cart.total_items(), Ordering::SeqCst)
        });

        let page = Arc::new(Self {
            catalog,
            cart,
            state: Mutex::new(BrowseState {
                category: DEFAULT_CATEGORY.to_string(),
                query: String::new(),
                page: 1,
                products: Vec::new(),
                page_count: 1,
                loading: true,
            }),
            generation: AtomicU64::new(0),
            cart_count,
            _cart_sub: cart_sub,
        });
        page.schedule_refresh();
        page
    }

    /// Updates the search text and resets to page 1.
    pub fn set_query(self: &Arc<Self>, query: impl Into<String>) {
        {
            let mut state = self.lock_state();
            state.query = query.into();
            state.page = 1;
        }
        self.schedule_refresh();
    }

    /// Switches category and resets to page 1.
    pub fn set_category(self: &Arc<Self>, category: impl Into<String>) {
        {
            let mut state = self.lock_state();
            state.category = category.into();
            state.page = 1;
        }
        self.schedule_refresh();
    }

    /// Moves to `page`; the accessor clamps out-of-range values.
    pub fn set_page(self: &Arc<Self>, page: u32) {
        self.lock_state().page = page;
        self.schedule_refresh();
    }

    /// Current product slice (a snapshot, not a live view).
    pub fn products(&self) -> Vec<Product> {
        self.lock_state().products.clone()
    }

    pub fn page_count(&self) -> u32 {
        self.lock_state().page_count
    }

    pub fn is_loading(&self) -> bool {
        self.lock_state().loading
    }

    /// Live cart badge count, kept current by the store subscription.
    pub fn cart_count(&self) -> u32 {
        self.cart_count.load(Ordering::SeqCst)
    }

    pub fn add_to_cart(&self, product: &Product) {
        self.cart.add_item(product);
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, BrowseState> {
        self.state.lock().expect("browse state poisoned")
    }

    fn schedule_refresh(self: &Arc<Self>) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        // Flip loading right away; whichever refresh ends up newest clears it.
        self.lock_state().loading = true;
        let page = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(SEARCH_DEBOUNCE).await;
            // A newer descriptor arrived while we waited; never start the fetch.
            if page.generation.load(Ordering::SeqCst) != generation {
                return;
            }

            let params = {
                let state = page.lock_state();
                FetchParams {
                    category: Some(state.category.clone()),
                    query: Some(state.query.clone()),
                    page: Some(state.page),
                    page_size: Some(DEFAULT_PAGE_SIZE),
                }
            };

            let response = page.catalog.fetch_products(&params).await;

            // Superseded while in flight; drop the stale result silently.
            if page.generation.load(Ordering::SeqCst) != generation {
                return;
            }

            let mut state = page.lock_state();
            state.products = response.products;
            state.page_count = response.page_count.max(1);
            state.loading = false;
        });
    }
}
