pub mod error_boundary;
pub mod filter_panel;
pub mod header;
pub mod product_card;
pub mod product_grid;
pub mod suspend_boundary;
