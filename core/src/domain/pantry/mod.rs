pub mod entities;
pub mod locks;
pub mod ports;
pub mod reconcile;
pub mod services;
pub mod value_objects;

pub use entities::PantryItem;
pub use ports::{PantryItemRepository, PantryService};
pub use value_objects::*;
