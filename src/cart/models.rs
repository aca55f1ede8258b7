//! Cart Domain Models
//!
//! This module contains the data structures shared by the cart store and the
//! catalog accessor: the catalog `Product` and the persisted `CartItem`.

use serde::{Deserialize, Serialize};

// =============================================================================
// Domain Models
// =============================================================================

/// A catalog entry as returned by the catalog accessor.
///
/// Products are constructed per fetch and never persisted; the only durable
/// copy of a product is the snapshot inside a [`CartItem`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique id within a data source (remote code or synthesized id)
    pub id: String,

    /// Display name
    pub name: String,

    /// Display description
    pub description: String,

    /// Price in integer currency units (smallest display unit)
    pub price: u32,

    /// Free-text category label, lower-cased for matching
    pub category: String,

    /// Optional rating in [3.0, 5.0]
    pub rating: Option<f32>,

    /// Resolvable image URI
    pub image_url: String,

    /// Availability flag
    pub in_stock: bool,

    /// Optional quantity hint, defaults to 1 when added to a cart
    pub quantity: Option<u32>,
}

/// A product snapshot plus a mandatory quantity, the unit persisted in the
/// cart store.
///
/// Every field except `id` and `quantity` carries a serde default so that
/// sparse persisted entries still deserialize; entries missing an `id` string
/// or a numeric `quantity` fail to deserialize and are dropped by the reader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product id this entry snapshots
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub price: u32,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub rating: Option<f32>,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub in_stock: bool,

    /// Quantity of this item, always >= 1 once persisted
    pub quantity: u32,
}

impl CartItem {
    /// Builds a cart entry snapshotting `product` with the given quantity.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            category: product.category.clone(),
            rating: product.rating,
            image_url: product.image_url.clone(),
            in_stock: product.in_stock,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_entry_deserializes_with_defaults() {
        let item: CartItem =
            serde_json::from_value(json!({ "id": "p1", "quantity": 2 })).unwrap();
        assert_eq!(item.id, "p1");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price, 0);
        assert!(item.name.is_empty());
    }

    #[test]
    fn non_string_id_is_rejected() {
        let result =
            serde_json::from_value::<CartItem>(json!({ "id": 123, "quantity": 1 }));
        assert!(result.is_err());
    }

    #[test]
    fn missing_quantity_is_rejected() {
        let result = serde_json::from_value::<CartItem>(json!({ "id": "p1" }));
        assert!(result.is_err());
    }

    #[test]
    fn cart_item_round_trips_in_camel_case() {
        let product = Product {
            id: "p9".into(),
            name: "Palm Oil (1L)".into(),
            description: "Cold pressed".into(),
            price: 1240,
            category: "oil".into(),
            rating: Some(4.2),
            image_url: "https://example.test/p9.jpg".into(),
            in_stock: true,
            quantity: None,
        };
        let item = CartItem::from_product(&product, 3);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["imageUrl"], "https://example.test/p9.jpg");
        assert_eq!(value["inStock"], true);
        assert_eq!(serde_json::from_value::<CartItem>(value).unwrap(), item);
    }
}
