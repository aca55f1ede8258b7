//! Catalog Query and Response Models

use crate::cart::Product;
use serde::{Deserialize, Serialize};

/// Category applied when a descriptor leaves it unset.
pub const DEFAULT_CATEGORY: &str = "fruits";
/// Page size applied when a descriptor leaves it unset.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// A catalog query descriptor. Unset fields take the storefront defaults.
#[derive(Debug, Clone, Default)]
pub struct FetchParams {
    pub category: Option<String>,
    pub query: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// A descriptor with every field resolved.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedParams {
    pub category: String,
    pub query: String,
    pub page: u32,
    pub page_size: u32,
}

impl FetchParams {
    pub(crate) fn resolve(&self) -> ResolvedParams {
        ResolvedParams {
            category: self
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            query: self.query.clone().unwrap_or_default(),
            page: self.page.unwrap_or(1).max(1),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
        }
    }
}

/// One page of catalog results.
///
/// `count` is the total across all pages (server-reported on the live path,
/// locally filtered on fallback), not `products.len()`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub count: u64,
    pub page: u32,
    pub page_count: u32,
    pub products: Vec<Product>,
}

// =============================================================================
// Remote payload shape
// =============================================================================

/// Search response shape of the remote food-data API. Every field is
/// optional; deviations fall through to the caller's fallback path.
#[derive(Debug, Deserialize)]
pub(crate) struct RemoteSearchResponse {
    pub count: Option<u64>,
    pub products: Option<Vec<RemoteProduct>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteProduct {
    pub code: Option<String>,
    pub product_name: Option<String>,
    pub categories: Option<String>,
    pub image_url: Option<String>,
    pub generic_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_applies_defaults() {
        let resolved = FetchParams::default().resolve();
        assert_eq!(resolved.category, "fruits");
        assert_eq!(resolved.query, "");
        assert_eq!(resolved.page, 1);
        assert_eq!(resolved.page_size, 12);
    }

    #[test]
    fn resolve_floors_page_and_page_size() {
        let resolved = FetchParams {
            page: Some(0),
            page_size: Some(0),
            ..Default::default()
        }
        .resolve();
        assert_eq!(resolved.page, 1);
        assert_eq!(resolved.page_size, 1);
    }

    #[test]
    fn remote_payload_tolerates_missing_fields() {
        let payload: RemoteSearchResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(payload.count.is_none());
        assert!(payload.products.is_none());

        let payload: RemoteSearchResponse =
            serde_json::from_str(r#"{"count": 7, "products": [{"code": "123"}]}"#).unwrap();
        assert_eq!(payload.count, Some(7));
        assert_eq!(payload.products.unwrap().len(), 1);
    }
}
