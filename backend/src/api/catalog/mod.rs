//! Catalog API route handlers and module exports.

mod fetch_catalog;
pub use fetch_catalog::fetch_catalog;
