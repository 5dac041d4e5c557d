//! Facet option derivation from the loaded snapshot.
//!
//! All three extractors are pure and cheap enough to re-run on every
//! dataset change; order is first-occurrence order in the input, and
//! empty values never appear. The brand list deliberately covers the
//! whole dataset instead of the currently filtered subset, while the
//! sub-category list is narrowed by the selected top-level category.

use crate::product::Product;

pub fn top_level_categories(products: &[Product]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for product in products {
        if let Some(lvl0) = product.categories.first() {
            if !lvl0.is_empty() && !out.contains(lvl0) {
                out.push(lvl0.clone());
            }
        }
    }
    out
}

/// Distinct sub-categories among products whose top-level category matches
/// `top_level`.
pub fn sub_categories(products: &[Product], top_level: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for product in products {
        if product.categories.first().map(String::as_str) != Some(top_level) {
            continue;
        }
        if let Some(lvl1) = product.categories.get(1) {
            if !lvl1.is_empty() && !out.contains(lvl1) {
                out.push(lvl1.clone());
            }
        }
    }
    out
}

pub fn brands(products: &[Product]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for product in products {
        if !product.brand.is_empty() && !out.contains(&product.brand) {
            out.push(product.brand.clone());
        }
    }
    out
}


#[cfg(test)]
mod tests {
    use super::*;

    fn product(brand: &str, categories: &[&str]) -> Product {
        Product {
            object_id: format!("{brand}-{}", categories.join("/")),
            name: String::new(),
            description: String::new(),
            price: 0.0,
            image: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            rating: 0,
            free_shipping: false,
            brand: brand.to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn top_level_categories_keep_first_occurrence_order() {
        let products = vec![
            product("A", &["Shoes", "Running"]),
            product("B", &["Audio", "Headphones"]),
            product("C", &["Shoes", "Casual"]),
            product("D", &[]),
        ];
        assert_eq!(top_level_categories(&products), vec!["Shoes", "Audio"]);
    }

    #[test]
    fn sub_categories_are_narrowed_by_the_selected_parent() {
        let products = vec![
            product("A", &["Shoes", "Running"]),
            product("B", &["Audio", "Headphones"]),
            product("C", &["Shoes", "Casual"]),
            product("D", &["Shoes", "Running"]),
            product("E", &["Shoes"]),
        ];
        assert_eq!(sub_categories(&products, "Shoes"), vec!["Running", "Casual"]);
        assert_eq!(sub_categories(&products, "Audio"), vec!["Headphones"]);
        assert!(sub_categories(&products, "Garden").is_empty());
    }

    #[test]
    fn brands_collapse_duplicates_and_skip_empty_values() {
        let products = vec![
            product("Nike", &["Shoes"]),
            product("", &["Shoes"]),
            product("Adidas", &["Shoes"]),
            product("Nike", &["Audio"]),
        ];
        assert_eq!(brands(&products), vec!["Nike", "Adidas"]);
    }

    #[test]
    fn empty_dataset_produces_empty_option_lists() {
        assert!(top_level_categories(&[]).is_empty());
        assert!(sub_categories(&[], "Shoes").is_empty());
        assert!(brands(&[]).is_empty());
    }
}
