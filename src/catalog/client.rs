//! Catalog Data Accessor
//!
//! Fetches product data from the remote search API and maps it into the
//! domain [`Product`] shape. Any failure on the live path (network error,
//! non-2xx status, malformed payload) falls back to the synthesized catalog,
//! filtered and paginated with the same pipeline, so `fetch_products`
//! always resolves.
//!
//! The accessor holds no cache: every call re-fetches or re-synthesizes,
//! and fallback prices/ratings/stock vary across calls unless the rng is
//! seeded.

use super::mock;
use super::models::{FetchParams, ProductResponse, RemoteProduct, RemoteSearchResponse, ResolvedParams};
use crate::cart::Product;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;
use tracing::warn;
use uuid::Uuid;

/// Default remote search endpoint.
pub const SEARCH_ENDPOINT: &str = "https://world.openfoodfacts.org/api/v2/product/search";

const DEFAULT_NAME: &str = "Unnamed Product";
const DEFAULT_DESCRIPTION: &str = "Sustainably sourced agricultural produce";

// =============================================================================
// Catalog Client
// =============================================================================

/// Stateless catalog accessor with an injectable random source.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    rng: Mutex<StdRng>,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Client against the default endpoint with an entropy-seeded rng.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Client with a pinned rng seed, for reproducible synthesized data.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Overrides the search endpoint (tests point this at an unroutable
    /// address to force the fallback path).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: SEARCH_ENDPOINT.to_string(),
            rng: Mutex::new(rng),
        }
    }

    /// Fetches one page of products for `params`.
    ///
    /// Never fails: any live-path error is logged and answered with the
    /// synthesized fallback catalog. Callers cannot tell the two apart from
    /// the response alone.
    pub async fn fetch_products(&self, params: &FetchParams) -> ProductResponse {
        let resolved = params.resolve();
        match self.fetch_live(&resolved).await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "live catalog fetch failed, serving synthesized data");
                let products = {
                    let mut rng = self.rng.lock().expect("rng mutex poisoned");
                    mock::mock_products(&mut *rng)
                };
                filter_and_paginate(products, &resolved)
            }
        }
    }

    async fn fetch_live(&self, params: &ResolvedParams) -> Result<ProductResponse, reqwest::Error> {
        let mut query: Vec<(&str, String)> = vec![
            ("json", "1".to_string()),
            ("page", params.page.to_string()),
            ("page_size", params.page_size.to_string()),
            ("country", "ng".to_string()),
            ("sort_by", "popularity".to_string()),
        ];
        if !params.category.is_empty() {
            query.push(("category", params.category.clone()));
        }
        if !params.query.is_empty() {
            query.push(("q", params.query.clone()));
        }

        let payload: RemoteSearchResponse = self
            .http
            .get(&self.base_url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let products: Vec<Product> = {
            let mut rng = self.rng.lock().expect("rng mutex poisoned");
            payload
                .products
                .unwrap_or_default()
                .into_iter()
                .map(|remote| map_remote(&mut *rng, remote))
                .collect()
        };

        // The server already sliced this page; count drives pagination math.
        let count = payload.count.unwrap_or(products.len() as u64);
        Ok(ProductResponse {
            count,
            page: params.page,
            page_count: page_count(count, params.page_size),
            products,
        })
    }
}

/// Maps a remote record into the domain shape, synthesizing the fields the
/// remote API does not carry (price, rating, stock).
fn map_remote<R: rand::Rng>(rng: &mut R, remote: RemoteProduct) -> Product {
    let categories = remote.categories.as_deref().unwrap_or("");
    let id = remote
        .code
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let name = remote
        .product_name
        .clone()
        .or_else(|| remote.generic_name.clone())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());
    let description = remote
        .generic_name
        .or(remote.product_name)
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
    let category = categories
        .split(',')
        .next()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .unwrap_or("Other")
        .to_string();
    let image_url = remote
        .image_url
        .unwrap_or_else(|| format!("https://picsum.photos/400/400?random={id}"));

    Product {
        price: mock::synth_price(rng, categories),
        rating: Some(mock::synth_rating(rng)),
        in_stock: mock::synth_in_stock(rng),
        id,
        name,
        description,
        category,
        image_url,
        quantity: Some(1),
    }
}

fn page_count(count: u64, page_size: u32) -> u32 {
    count.div_ceil(u64::from(page_size)).max(1) as u32
}

/// Shared filter + paginate pipeline for the fallback path.
///
/// Category matching is a case-insensitive substring test; the free-text
/// query matches name, description, or category, also case-insensitive.
/// The requested page clamps into [1, page_count] instead of erroring.
pub(crate) fn filter_and_paginate(
    products: Vec<Product>,
    params: &ResolvedParams,
) -> ProductResponse {
    let category = params.category.to_lowercase();
    let query = params.query.trim().to_lowercase();

    let filtered: Vec<Product> = products
        .into_iter()
        .filter(|product| {
            let product_category = product.category.to_lowercase();
            let category_match = category.is_empty() || product_category.contains(&category);
            let query_match = query.is_empty()
                || product.name.to_lowercase().contains(&query)
                || product.description.to_lowercase().contains(&query)
                || product_category.contains(&query);
            category_match && query_match
        })
        .collect();

    let count = filtered.len() as u64;
    let page_count = page_count(count, params.page_size);
    let page = params.page.clamp(1, page_count);
    let start = ((page - 1) * params.page_size) as usize;

    ProductResponse {
        count,
        page,
        page_count,
        products: filtered
            .into_iter()
            .skip(start)
            .take(params.page_size as usize)
            .collect(),
    }
}
