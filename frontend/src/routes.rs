use dioxus::prelude::*;

use crate::data_definitions::url_query::CatalogUrlQuery;
use crate::pages::catalog_page::CatalogPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:..catalog_query")]
    CatalogPage {
        catalog_query: CatalogUrlQuery,
    },
}
