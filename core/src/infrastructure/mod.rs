pub mod db;
pub mod health;
#[cfg(test)]
pub mod memory;
pub mod pantry;
pub mod recipe;
pub mod substitution;
