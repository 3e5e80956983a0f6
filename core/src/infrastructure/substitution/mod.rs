pub mod mappers;
pub mod repositories;

pub use repositories::substitution_repository::PostgresSubstitutionRepository;
