pub mod substitution_repository;
