pub mod create_substitution;
pub mod delete_substitution;
pub mod get_substitutions;
