//! Integration tests for the storefront core
//!
//! These tests exercise the public surface end to end:
//! - Catalog fetches degrading to the synthesized fallback
//! - Filter + pagination behavior through `fetch_products`
//! - The cart flow from browse page to cart page
//! - Debounced, last-request-wins catalog refresh

use agrimart::cart::{CartStore, MemoryStorage, Product};
use agrimart::catalog::{CatalogClient, FetchParams, MOCK_CATALOG_SIZE};
use agrimart::pages::{CartPage, ProductsPage, SEARCH_DEBOUNCE};
use std::sync::Arc;
use std::time::Duration;

/// A client whose live path always fails fast, forcing the fallback.
fn offline_client(seed: u64) -> Arc<CatalogClient> {
    Arc::new(CatalogClient::with_seed(seed).with_base_url("http://127.0.0.1:1/search"))
}

fn memory_cart() -> Arc<CartStore> {
    Arc::new(CartStore::new(Arc::new(MemoryStorage::new())))
}

fn all_categories(page: u32) -> FetchParams {
    FetchParams {
        category: Some(String::new()),
        query: Some(String::new()),
        page: Some(page),
        page_size: Some(12),
    }
}

/// Polls until the browse page settles, bounded by a timeout.
async fn wait_until_loaded(page: &Arc<ProductsPage>) {
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(50)).await;
        if !page.is_loading() {
            return;
        }
    }
    panic!("browse page never finished loading");
}

#[tokio::test]
async fn fetch_falls_back_on_connection_failure() {
    let catalog = offline_client(1);
    let response = catalog.fetch_products(&FetchParams::default()).await;

    assert!(!response.products.is_empty());
    assert!(response
        .products
        .iter()
        .all(|p| p.category == "fruits" && p.id.starts_with("mock-")));
}

#[tokio::test]
async fn fallback_pages_partition_the_catalog() {
    let catalog = offline_client(2);
    let mut ids = Vec::new();
    for page in 1..=3 {
        let response = catalog.fetch_products(&all_categories(page)).await;
        assert_eq!(response.count, MOCK_CATALOG_SIZE as u64);
        assert_eq!(response.page_count, 3);
        assert_eq!(response.page, page);
        assert_eq!(response.products.len(), 12);
        ids.extend(response.products.into_iter().map(|p| p.id));
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), MOCK_CATALOG_SIZE);

    let clamped = catalog.fetch_products(&all_categories(99)).await;
    assert_eq!(clamped.page, 3);
    assert_eq!(clamped.products.len(), 12);
}

#[tokio::test]
async fn fallback_query_with_no_match_is_empty_but_valid() {
    let catalog = offline_client(3);
    let response = catalog
        .fetch_products(&FetchParams {
            category: Some(String::new()),
            query: Some("zzz-no-such-produce".into()),
            ..Default::default()
        })
        .await;

    assert_eq!(response.count, 0);
    assert_eq!(response.page_count, 1);
    assert!(response.products.is_empty());
}

#[tokio::test]
async fn cart_flow_from_browse_to_cart_page() {
    let cart = memory_cart();
    let browse = ProductsPage::new(offline_client(4), Arc::clone(&cart));
    let cart_page = CartPage::new(Arc::clone(&cart));

    wait_until_loaded(&browse).await;
    let products = browse.products();
    assert!(!products.is_empty());

    browse.add_to_cart(&products[0]);
    browse.add_to_cart(&products[0]);
    browse.add_to_cart(&products[1]);

    // Both pages observe the same durable state via notifications.
    assert_eq!(browse.cart_count(), 3);
    let items = cart_page.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].quantity, 2);

    cart_page.set_quantity(&items[0].id, -2);
    assert_eq!(cart_page.items()[0].quantity, 1);

    cart_page.remove(&items[1].id);
    assert_eq!(cart_page.items().len(), 1);
    assert_eq!(
        cart_page.total_price(),
        u64::from(cart_page.items()[0].price)
    );

    cart_page.clear();
    assert!(cart_page.items().is_empty());
    assert_eq!(browse.cart_count(), 0);
}

#[tokio::test]
async fn rapid_descriptor_changes_apply_only_the_latest() {
    let cart = memory_cart();
    let browse = ProductsPage::new(offline_client(5), cart);

    // Each change lands inside the previous debounce window.
    browse.set_category(String::new());
    tokio::time::sleep(SEARCH_DEBOUNCE / 3).await;
    browse.set_query("rice");
    tokio::time::sleep(SEARCH_DEBOUNCE / 3).await;
    browse.set_query("palm oil");

    wait_until_loaded(&browse).await;
    let products = browse.products();
    assert!(!products.is_empty());
    assert!(products
        .iter()
        .all(|p: &Product| p.name.to_lowercase().contains("palm oil")));
    assert_eq!(browse.page_count(), 1);
}

#[tokio::test]
async fn page_changes_refetch_the_requested_slice() {
    let cart = memory_cart();
    let browse = ProductsPage::new(offline_client(6), cart);
    browse.set_category(String::new());
    wait_until_loaded(&browse).await;

    let first_page: Vec<String> = browse.products().into_iter().map(|p| p.id).collect();
    assert_eq!(browse.page_count(), 3);

    browse.set_page(2);
    wait_until_loaded(&browse).await;
    let second_page: Vec<String> = browse.products().into_iter().map(|p| p.id).collect();

    assert_eq!(second_page.len(), 12);
    assert!(first_page.iter().all(|id| !second_page.contains(id)));
}
