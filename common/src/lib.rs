//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod product;
pub mod filter_state;
pub mod url_codec;
pub mod filter_engine;
pub mod facets;
pub mod text_highlight;
pub mod dataset_store;