pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{DEFAULT_BASE_SERVINGS, Recipe, RecipeIngredient};
pub use ports::{RecipeRepository, RecipeService};
pub use value_objects::{CreateRecipeInput, RecipeDetails, RequirementInput};
