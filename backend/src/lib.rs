//! Backend library exports.

pub mod api;
