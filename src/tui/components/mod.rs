//! Reusable UI components.

pub mod chips;
pub mod ingredient_list;
pub mod key_hints;
pub mod order_popup;
pub mod status_bar;
pub mod summary;
