//! Bidirectional mapping between the filter state and the URL query string.

use crate::filter_state::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, FilterState, MAX_RATING};

/// Parses a raw query string into a [`FilterState`]. Every parameter is
/// independently optional; a missing or malformed value falls back to its
/// documented default. Unknown parameters are ignored and parameter order
/// is insignificant.
pub fn decode(query: &str) -> FilterState {
    let mut state = FilterState::default();
    let mut price_min = DEFAULT_PRICE_MIN;
    let mut price_max = DEFAULT_PRICE_MAX;

    for (key, value) in query_pairs(query) {
        match key.as_str() {
            "categoryLvl0" => state.category_lvl0 = value,
            "categoryLvl1" => state.category_lvl1 = value,
            "brand" => state.brand = value,
            "priceMin" => price_min = value.parse().unwrap_or(DEFAULT_PRICE_MIN),
            "priceMax" => price_max = value.parse().unwrap_or(DEFAULT_PRICE_MAX),
            // Only the literal string "true" turns the flag on.
            "freeShipping" => state.free_shipping = value == "true",
            "rating" => {
                state.rating = match value.parse::<u8>() {
                    Ok(rating) if rating <= MAX_RATING => rating,
                    _ => 0,
                }
            }
            _ => {}
        }
    }

    // An inverted pair is treated as one malformed parameter: decode must
    // never produce a state violating min <= max.
    if price_min > price_max {
        price_min = DEFAULT_PRICE_MIN;
        price_max = DEFAULT_PRICE_MAX;
    }
    state.price_range = (price_min, price_max);
    state
}

/// Serializes a [`FilterState`] into a query string, omitting every
/// parameter that equals its default so that "no filters" round-trips to
/// an empty string. Left inverse of [`decode`] for all decodable states.
pub fn encode(state: &FilterState) -> String {
    let mut params: Vec<String> = Vec::new();
    if !state.category_lvl0.is_empty() {
        params.push(format!("categoryLvl0={}", encode_component(&state.category_lvl0)));
    }
    if !state.category_lvl1.is_empty() {
        params.push(format!("categoryLvl1={}", encode_component(&state.category_lvl1)));
    }
    if !state.brand.is_empty() {
        params.push(format!("brand={}", encode_component(&state.brand)));
    }
    if state.price_range.0 != DEFAULT_PRICE_MIN {
        params.push(format!("priceMin={}", state.price_range.0));
    }
    if state.price_range.1 != DEFAULT_PRICE_MAX {
        params.push(format!("priceMax={}", state.price_range.1));
    }
    if state.free_shipping {
        params.push("freeShipping=true".to_string());
    }
    if state.rating != 0 {
        params.push(format!("rating={}", state.rating));
    }
    params.join("&")
}

/// Splits a raw query string into percent-decoded key/value pairs. A
/// leading `?` is tolerated and `+` decodes to a space.
pub fn query_pairs(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = decode_component(parts.next().unwrap_or(""));
            let value = decode_component(parts.next().unwrap_or(""));
            (key, value)
        })
        .collect()
}

pub fn encode_component(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        // Undecodable bytes: keep the raw text rather than dropping the value.
        Err(_) => raw,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_decodes_to_the_default_state() {
        assert_eq!(decode(""), FilterState::default());
        assert_eq!(decode("?"), FilterState::default());
    }

    #[test]
    fn default_state_encodes_to_an_empty_query() {
        assert_eq!(encode(&FilterState::default()), "");
    }

    #[test]
    fn decode_reads_every_documented_parameter() {
        let state = decode(
            "categoryLvl0=Shoes&categoryLvl1=Running&brand=Nike&priceMin=100&priceMax=500&freeShipping=true&rating=3",
        );
        assert_eq!(state.category_lvl0, "Shoes");
        assert_eq!(state.category_lvl1, "Running");
        assert_eq!(state.brand, "Nike");
        assert_eq!(state.price_range, (100, 500));
        assert!(state.free_shipping);
        assert_eq!(state.rating, 3);
    }

    #[test]
    fn encode_then_decode_round_trips_every_reachable_state() {
        let queries = [
            "",
            "categoryLvl0=Shoes",
            "categoryLvl0=Shoes&categoryLvl1=Running",
            "brand=Insignia%E2%84%A2",
            "brand=Bang %26 Olufsen",
            "priceMin=200&priceMax=300",
            "freeShipping=true",
            "rating=5",
            "categoryLvl0=TV %26 Home Theater&brand=LG&priceMax=999&rating=2",
        ];
        for query in queries {
            let state = decode(query);
            assert_eq!(decode(&encode(&state)), state, "query: {query}");
        }
    }

    #[test]
    fn malformed_numerics_fall_back_to_defaults() {
        let state = decode("priceMin=cheap&priceMax=lots&rating=many");
        assert_eq!(state.price_range, (84, 4000));
        assert_eq!(state.rating, 0);
    }

    #[test]
    fn valid_prices_are_kept_while_out_of_range_rating_is_rejected() {
        // Scenario: ?priceMin=200&priceMax=300&rating=10
        let state = decode("priceMin=200&priceMax=300&rating=10");
        assert_eq!(state.price_range, (200, 300));
        assert_eq!(state.rating, 0);
    }

    #[test]
    fn inverted_price_pair_resets_both_endpoints() {
        let state = decode("priceMin=900&priceMax=100");
        assert_eq!(state.price_range, (84, 4000));
    }

    #[test]
    fn free_shipping_requires_the_literal_true() {
        assert!(decode("freeShipping=true").free_shipping);
        assert!(!decode("freeShipping=True").free_shipping);
        assert!(!decode("freeShipping=1").free_shipping);
        assert!(!decode("freeShipping=").free_shipping);
    }

    #[test]
    fn unknown_parameters_are_ignored() {
        let state = decode("utm_source=mail&brand=Sony&page=4");
        assert_eq!(state.brand, "Sony");
        assert_eq!(decode(&encode(&state)), state);
    }

    #[test]
    fn values_are_percent_decoded() {
        let state = decode("categoryLvl0=TV%20%26%20Home%20Theater&brand=Caf%C3%A9+Roast");
        assert_eq!(state.category_lvl0, "TV & Home Theater");
        assert_eq!(state.brand, "Café Roast");
    }
}
