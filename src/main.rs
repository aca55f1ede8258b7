use agrimart::cart::{CartStore, FileStorage};
use agrimart::catalog::{CatalogClient, FetchParams};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() {
    setup_tracing();

    // Cart state lives in one JSON blob on disk.
    let data_dir =
        std::env::var("AGRIMART_DATA_DIR").unwrap_or_else(|_| ".agrimart".to_string());
    let cart = Arc::new(CartStore::new(Arc::new(FileStorage::new(&data_dir))));
    let catalog = Arc::new(CatalogClient::new());

    let response = catalog.fetch_products(&FetchParams::default()).await;
    info!(
        count = response.count,
        page = response.page,
        page_count = response.page_count,
        "fetched catalog page"
    );
    for product in &response.products {
        println!(
            "{:<40} {:>6}  {:<12} {}",
            product.name,
            product.price,
            product.category,
            if product.in_stock { "in stock" } else { "out of stock" }
        );
    }

    if let Some(first) = response.products.first() {
        cart.add_item(first);
        println!(
            "added {} to cart: {} item(s), total {}",
            first.name,
            cart.total_items(),
            cart.total_price()
        );
    }
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}
