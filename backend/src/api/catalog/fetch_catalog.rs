//! Fetches the full product list from the remote catalog endpoint.

use common::product::Product;
use serde::{Deserialize, Serialize};

/// Wire shape of the results endpoint: a JSON array of pages where only
/// the first page carries the product array.
#[derive(Debug, Serialize, Deserialize)]
pub struct RawResultsPage {
    #[serde(default)]
    pub hits: Vec<Product>,
}

pub async fn fetch_catalog() -> anyhow::Result<Vec<Product>> {
    let base_url = std::env::var("CATALOG_API_URL").unwrap_or("http://localhost:3001".to_string());
    let url = format!("{}/results", base_url);
    let client = reqwest::Client::new();

    let response = client.get(url).send().await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    extract_hits(&response_txt)
}

/// Pulls the product array out of the results payload. A payload without a
/// non-empty `hits` array on its first element is "no data": logged and
/// returned as an empty list, not an error.
pub fn extract_hits(response_txt: &str) -> anyhow::Result<Vec<Product>> {
    let pages: Vec<RawResultsPage> = serde_json::from_str(response_txt)?;
    match pages.into_iter().next() {
        Some(page) if !page.hits.is_empty() => Ok(page.hits),
        _ => {
            tracing::warn!("catalog results payload contained no hits");
            Ok(Vec::new())
        }
    }
}
