pub mod cache;
pub mod entities;
pub mod ports;
pub mod services;

pub use entities::Substitution;
pub use ports::{SubstitutionRepository, SubstitutionService};
