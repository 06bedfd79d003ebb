pub mod header;
pub mod results_overlay;
pub mod search_panel;
