pub mod mappers;
pub mod repositories;

pub use repositories::pantry_item_repository::PostgresPantryItemRepository;
