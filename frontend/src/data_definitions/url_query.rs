//! URL query representation of the search and filter state.

use std::fmt::Display;

use common::filter_state::FilterState;
use common::url_codec;

/// Everything the catalog route carries in its query string: the encoded
/// [`FilterState`] plus the free-text `q` term. `Display` and `From<&str>`
/// let the router round-trip it as a full query segment, so the URL stays
/// the persisted serialization and this struct the working copy.
///
/// Malformed parameter values never fail the parse; they fall back to
/// their defaults inside the codec.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogUrlQuery {
    pub search_query: String,
    pub filters: FilterState,
}

impl From<&str> for CatalogUrlQuery {
    fn from(query: &str) -> Self {
        let search_query = url_codec::query_pairs(query)
            .into_iter()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self {
            search_query,
            filters: url_codec::decode(query),
        }
    }
}

// Display produces the query string that From<&str> parses: `q` first,
// then the filter parameters, defaults omitted.
impl Display for CatalogUrlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if !self.search_query.is_empty() {
            parts.push(format!("q={}", url_codec::encode_component(&self.search_query)));
        }
        let filters = url_codec::encode(&self.filters);
        if !filters.is_empty() {
            parts.push(filters);
        }
        write!(f, "{}", parts.join("&"))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_and_no_search_produce_an_empty_query_string() {
        assert_eq!(CatalogUrlQuery::default().to_string(), "");
    }

    #[test]
    fn search_term_rides_in_the_q_parameter() {
        let query = CatalogUrlQuery::from("q=red%20shoe&rating=3");
        assert_eq!(query.search_query, "red shoe");
        assert_eq!(query.filters.rating, 3);
        assert_eq!(query.to_string(), "q=red%20shoe&rating=3");
    }

    #[test]
    fn display_and_parse_round_trip() {
        let parsed = CatalogUrlQuery::from("q=caf%C3%A9&categoryLvl0=Appliances&freeShipping=true");
        assert_eq!(CatalogUrlQuery::from(parsed.to_string().as_str()), parsed);
    }

    #[test]
    fn clearing_filters_leaves_only_the_search_term() {
        let mut query = CatalogUrlQuery::from("q=shoe&brand=Nike&rating=4");
        query.filters.clear();
        assert_eq!(query.to_string(), "q=shoe");
    }
}
