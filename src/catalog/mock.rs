//! Synthesized Fallback Catalog
//!
//! When the live fetch fails, the storefront serves a locally generated
//! catalog with a deterministic shape (ids, names, categories) and
//! randomized price, rating, and stock so it still feels alive. The random
//! source is injected so tests can pin a seed.

use crate::cart::Product;
use rand::Rng;

/// Number of items in the synthesized catalog.
pub const MOCK_CATALOG_SIZE: usize = 36;

/// Category rotation shared by the fallback generator and the browse page.
pub const CATEGORIES: [&str; 5] = ["fruits", "vegetables", "grains", "oil", "spices"];

const MOCK_NAMES: [&str; 12] = [
    "Organic Cassava Flour",
    "Fresh Plantain Bunch",
    "Local Rice (5kg)",
    "Palm Oil (1L)",
    "Groundnut Oil (500ml)",
    "Dried Beans (2kg)",
    "Tomato Paste (70g)",
    "Ginger Root (500g)",
    "Onion Bulbs (1kg)",
    "Pepper (Mixed)",
    "Soybean Meal",
    "Maize Grain",
];

const MOCK_DESCRIPTION: &str = "Sustainably sourced, smallholder farmer certified";

/// Base price for a category label, in integer currency units.
pub(crate) fn base_price(categories: &str) -> u32 {
    let lower = categories.to_lowercase();
    if lower.contains("vegetables") {
        300
    } else if lower.contains("grains") {
        800
    } else if lower.contains("oil") {
        1200
    } else if lower.contains("spices") {
        600
    } else {
        500
    }
}

/// base price scaled by a uniform factor in [0.8, 1.2), rounded.
pub(crate) fn synth_price<R: Rng>(rng: &mut R, categories: &str) -> u32 {
    let factor: f64 = rng.gen_range(0.8..1.2);
    (f64::from(base_price(categories)) * factor).round() as u32
}

/// Uniform rating in [3.0, 5.0), one decimal place.
pub(crate) fn synth_rating<R: Rng>(rng: &mut R) -> f32 {
    let rating: f64 = rng.gen_range(3.0..5.0);
    ((rating * 10.0).round() / 10.0) as f32
}

/// In stock with probability 0.9.
pub(crate) fn synth_in_stock<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(0.9)
}

/// Generates the full synthesized catalog: 36 items cycling the name list
/// and the category rotation, with `Batch N` suffixes past the first cycle.
pub(crate) fn mock_products<R: Rng>(rng: &mut R) -> Vec<Product> {
    (0..MOCK_CATALOG_SIZE)
        .map(|i| {
            let category = CATEGORIES[i % CATEGORIES.len()];
            let base_name = MOCK_NAMES[i % MOCK_NAMES.len()];
            let name = if i >= MOCK_NAMES.len() {
                format!("{base_name} Batch {}", i / MOCK_NAMES.len() + 1)
            } else {
                base_name.to_string()
            };
            Product {
                id: format!("mock-{}", i + 1),
                name,
                description: MOCK_DESCRIPTION.to_string(),
                price: synth_price(rng, category),
                category: category.to_string(),
                rating: Some(synth_rating(rng)),
                image_url: format!("https://picsum.photos/seed/agrimart-{i}/400/400"),
                in_stock: synth_in_stock(rng),
                quantity: Some(1),
            }
        })
        .collect()
}
