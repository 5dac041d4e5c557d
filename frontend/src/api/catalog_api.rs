//! Client API calls for the catalog endpoint.

use common::product::Product;
use dioxus::prelude::*;


#[server]
pub async fn fetch_catalog() -> Result<Vec<Product>, ServerFnError> {
    let x = backend::api::catalog::fetch_catalog().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
