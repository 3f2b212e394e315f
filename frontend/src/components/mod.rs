pub mod collection_selector;
pub mod copy_link_button;
pub mod counts_table;
pub mod dataset_filter_editor;
pub mod error_boundary;
pub mod navbar;
pub mod state_editor;
pub mod suspend_boundary;
pub mod variant_filter_editor;
