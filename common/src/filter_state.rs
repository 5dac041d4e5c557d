//! Canonical filter criteria and their mutation entry points.

use serde::{Deserialize, Serialize};

/// Price slider bounds. Domain constants, not computed from the dataset.
pub const DEFAULT_PRICE_MIN: u32 = 84;
pub const DEFAULT_PRICE_MAX: u32 = 4000;
pub const MAX_RATING: u8 = 5;


/// The single source of truth for all active facet filters. The free-text
/// search term lives outside this struct and is composed with it at filter
/// time.
///
/// Empty strings mean "unset"; `rating == 0` means no rating constraint;
/// `free_shipping == false` means no shipping constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub category_lvl0: String,
    pub category_lvl1: String,
    pub brand: String,
    pub price_range: (u32, u32),
    pub free_shipping: bool,
    pub rating: u8,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category_lvl0: String::new(),
            category_lvl1: String::new(),
            brand: String::new(),
            price_range: (DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX),
            free_shipping: false,
            rating: 0,
        }
    }
}

// All writes to the filter state go through these methods so there is one
// designated mutation path per logical user action.
impl FilterState {
    pub fn select_category(&mut self, lvl0: String, lvl1: Option<String>) {
        self.category_lvl0 = lvl0;
        self.category_lvl1 = lvl1.unwrap_or_default();
    }

    pub fn set_brand(&mut self, brand: String) {
        self.brand = brand;
    }

    /// Swaps the endpoints if given in the wrong order, keeping min <= max.
    pub fn set_price_range(&mut self, min: u32, max: u32) {
        self.price_range = if min <= max { (min, max) } else { (max, min) };
    }

    pub fn toggle_free_shipping(&mut self) {
        self.free_shipping = !self.free_shipping;
    }

    /// Ratings above [`MAX_RATING`] clear the constraint instead of setting
    /// an unsatisfiable one.
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = if rating <= MAX_RATING { rating } else { 0 };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_parent_category_resets_the_sub_category() {
        let mut state = FilterState::default();
        state.select_category("Shoes".to_string(), Some("Running".to_string()));
        assert_eq!(state.category_lvl0, "Shoes");
        assert_eq!(state.category_lvl1, "Running");

        state.select_category("Audio".to_string(), None);
        assert_eq!(state.category_lvl0, "Audio");
        assert_eq!(state.category_lvl1, "");
    }

    #[test]
    fn price_range_endpoints_are_reordered_when_reversed() {
        let mut state = FilterState::default();
        state.set_price_range(900, 300);
        assert_eq!(state.price_range, (300, 900));
    }

    #[test]
    fn rating_above_the_maximum_clears_the_constraint() {
        let mut state = FilterState::default();
        state.set_rating(4);
        assert_eq!(state.rating, 4);
        state.set_rating(9);
        assert_eq!(state.rating, 0);
    }

    #[test]
    fn clear_resets_every_field_to_its_default() {
        let mut state = FilterState::default();
        state.select_category("Shoes".to_string(), Some("Casual".to_string()));
        state.set_brand("Nike".to_string());
        state.set_price_range(100, 200);
        state.toggle_free_shipping();
        state.set_rating(3);
        assert!(!state.is_default());

        state.clear();
        assert!(state.is_default());
        assert_eq!(state.price_range, (DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX));
    }
}
