//! Snapshot holder for the loaded product catalog.

use crate::product::Product;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Request(String),
    MalformedPayload(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(err) => write!(f, "Failed to fetch catalog: {}", err),
            Self::MalformedPayload(err) => write!(f, "Failed to parse catalog payload: {}", err),
        }
    }
}

/// Owns the immutable product snapshot. Loads are identified by a
/// monotonically increasing token so completions can arrive out of order:
/// a completion older than the last applied one is discarded, never
/// overwriting newer data.
///
/// "No data yet" and "load failed" are the same displayable state, an
/// empty snapshot; the error is only kept for diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetStore {
    products: Vec<Product>,
    next_token: u64,
    applied_token: Option<u64>,
    last_error: Option<FetchError>,
}

impl DatasetStore {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn begin_load(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }

    /// Applies a finished load. On success the previous snapshot is
    /// replaced in full, no incremental merge; on failure it is left
    /// untouched. Returns whether the completion was applied.
    pub fn complete_load(&mut self, token: u64, result: Result<Vec<Product>, FetchError>) -> bool {
        if let Some(applied) = self.applied_token {
            if token <= applied {
                return false;
            }
        }
        self.applied_token = Some(token);
        match result {
            Ok(products) => {
                self.products = products;
                self.last_error = None;
            }
            Err(err) => {
                self.last_error = Some(err);
            }
        }
        true
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }
}
