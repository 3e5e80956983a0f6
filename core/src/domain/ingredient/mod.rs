//! Ingredient identity resolution.
//!
//! Two free-text ingredient names denote the same ingredient when, after
//! normalization, they are identical, form a household substitution pair, or
//! score at least [`FUZZY_MATCH_THRESHOLD`] on token-sort similarity.

pub mod matcher;
pub mod value_objects;

pub use matcher::{
    FUZZY_MATCH_THRESHOLD, IngredientName, MatchKind, find_match, match_kind, names_match,
    normalize_name, token_sort_ratio,
};
pub use value_objects::SubstitutionSet;
