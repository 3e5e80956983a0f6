pub mod add_item;
pub mod adjust_item;
pub mod get_items;
pub mod remove_item;
