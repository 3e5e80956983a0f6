use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::{Recipe, RecipeIngredient};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RequirementInput {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeInput {
    pub title: String,
    pub servings: Option<i32>,
    /// Requirements in cooking order; positions follow this order.
    pub ingredients: Vec<RequirementInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDetails {
    pub recipe: Recipe,
    pub ingredients: Vec<RecipeIngredient>,
}
