//! Pure filtering pass over the product snapshot.

use crate::filter_state::FilterState;
use crate::product::Product;

/// Applies every active predicate to the snapshot and returns the matching
/// products in their original order. An empty result is a normal outcome,
/// never an error. The snapshot itself is never mutated.
pub fn apply(products: &[Product], filters: &FilterState, search_query: &str) -> Vec<Product> {
    let needle = search_query.trim().to_lowercase();
    products
        .iter()
        .filter(|product| {
            matches_search(product, &needle)
                && matches_category(product, &filters.category_lvl0)
                && matches_category(product, &filters.category_lvl1)
                && matches_brand(product, &filters.brand)
                && matches_price(product, filters.price_range)
                && matches_free_shipping(product, filters.free_shipping)
                && matches_rating(product, filters.rating)
        })
        .cloned()
        .collect()
}

/// Literal lowercase substring match over name, description, category
/// labels and brand. `needle` must already be lowercased.
fn matches_search(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.categories.iter().any(|c| c.to_lowercase().contains(needle))
        || product.brand.to_lowercase().contains(needle)
}

/// Containment over the whole category sequence, not just the matching
/// level. This mirrors the selection UI, which treats category membership
/// rather than position.
fn matches_category(product: &Product, wanted: &str) -> bool {
    wanted.is_empty() || product.categories.iter().any(|c| c == wanted)
}

fn matches_brand(product: &Product, wanted: &str) -> bool {
    wanted.is_empty() || product.brand.to_lowercase() == wanted.to_lowercase()
}

// Inclusive on both endpoints.
fn matches_price(product: &Product, (min, max): (u32, u32)) -> bool {
    product.price >= min as f64 && product.price <= max as f64
}

fn matches_free_shipping(product: &Product, wanted: bool) -> bool {
    !wanted || product.free_shipping
}

fn matches_rating(product: &Product, minimum: u8) -> bool {
    minimum == 0 || product.rating >= minimum
}


#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: f64, rating: u8, brand: &str, categories: &[&str], free_shipping: bool) -> Product {
        Product {
            object_id: name.to_string(),
            name: name.to_string(),
            description: format!("A very nice {}", name.to_lowercase()),
            price,
            image: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            rating,
            free_shipping,
            brand: brand.to_string(),
            url: String::new(),
        }
    }

    fn shoes() -> Vec<Product> {
        vec![
            product("Red Shoe", 100.0, 4, "Nike", &["Shoes", "Running"], true),
            product("Blue Shoe", 90.0, 2, "Adidas", &["Shoes", "Casual"], false),
        ]
    }

    #[test]
    fn no_filters_pass_everything_through_unchanged() {
        let products = shoes();
        let filtered = apply(&products, &FilterState::default(), "");
        assert_eq!(filtered, products);
    }

    #[test]
    fn apply_is_pure_and_idempotent() {
        let products = shoes();
        let filters = FilterState { rating: 3, ..Default::default() };
        let first = apply(&products, &filters, "");
        let second = apply(&products, &filters, "");
        assert_eq!(first, second);
        // The input snapshot is untouched.
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn minimum_rating_excludes_lower_rated_products() {
        let products = shoes();
        let filters = FilterState { rating: 3, ..Default::default() };
        let filtered = apply(&products, &filters, "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Red Shoe");
    }

    #[test]
    fn brand_matches_case_insensitively() {
        let products = shoes();
        let filters = FilterState {
            category_lvl0: "Shoes".to_string(),
            brand: "adidas".to_string(),
            ..Default::default()
        };
        let filtered = apply(&products, &filters, "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Blue Shoe");
    }

    #[test]
    fn search_matches_substrings_in_any_text_field() {
        let products = shoes();
        assert_eq!(apply(&products, &FilterState::default(), "shoe").len(), 2);
        assert_eq!(apply(&products, &FilterState::default(), "nike").len(), 1);
        assert_eq!(apply(&products, &FilterState::default(), "running").len(), 1);
        assert_eq!(apply(&products, &FilterState::default(), "quartz").len(), 0);
    }

    #[test]
    fn category_filter_matches_by_containment_not_position() {
        let products = shoes();
        let filters = FilterState { category_lvl0: "Running".to_string(), ..Default::default() };
        let filtered = apply(&products, &filters, "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Red Shoe");
    }

    #[test]
    fn price_endpoints_are_inclusive() {
        let products = shoes();
        let filters = FilterState { price_range: (90, 100), ..Default::default() };
        assert_eq!(apply(&products, &filters, "").len(), 2);

        let filters = FilterState { price_range: (84, 99), ..Default::default() };
        let filtered = apply(&products, &filters, "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Blue Shoe");
    }

    #[test]
    fn rating_zero_excludes_nothing_and_five_keeps_only_perfect() {
        let mut products = shoes();
        products.push(product("Gold Shoe", 400.0, 5, "Asics", &["Shoes"], true));

        let unconstrained = FilterState { rating: 0, ..Default::default() };
        assert_eq!(apply(&products, &unconstrained, "").len(), 3);

        let perfect_only = FilterState { rating: 5, ..Default::default() };
        let filtered = apply(&products, &perfect_only, "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Gold Shoe");
    }

    #[test]
    fn free_shipping_filter_keeps_only_flagged_products() {
        let products = shoes();
        let filters = FilterState { free_shipping: true, ..Default::default() };
        let filtered = apply(&products, &filters, "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Red Shoe");
    }

    #[test]
    fn empty_dataset_yields_an_empty_result() {
        assert!(apply(&[], &FilterState::default(), "").is_empty());
        assert!(apply(&[], &FilterState::default(), "shoe").is_empty());
    }

    #[test]
    fn all_predicates_compose_with_logical_and() {
        let products = shoes();
        let filters = FilterState {
            category_lvl0: "Shoes".to_string(),
            brand: "Nike".to_string(),
            free_shipping: true,
            rating: 4,
            ..Default::default()
        };
        let filtered = apply(&products, &filters, "red");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Red Shoe");

        // One failing predicate removes the product.
        let filtered = apply(&products, &filters, "blue");
        assert!(filtered.is_empty());
    }
}
