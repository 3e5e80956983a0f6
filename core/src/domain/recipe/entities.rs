use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp, generate_uuid_v7},
    ingredient::IngredientName,
};

/// Serving count assumed when a recipe does not declare one.
pub const DEFAULT_BASE_SERVINGS: i32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    /// Baseline serving count the ingredient quantities are written for.
    pub servings: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    pub fn new(title: &str, servings: Option<i32>) -> Result<Self, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::Invalid("recipe title is required".to_string()));
        }

        let (now, timestamp) = generate_timestamp();

        Ok(Self {
            id: Uuid::new_v7(timestamp),
            title: title.to_string(),
            servings,
            created_at: now,
        })
    }

    pub fn base_servings(&self) -> i32 {
        self.servings.unwrap_or(DEFAULT_BASE_SERVINGS)
    }
}

/// One required ingredient of a recipe, expressed in its canonical name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub id: Uuid,
    pub recipe_id: Uuid,
    /// Order of the requirement within the recipe.
    pub position: i32,
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub note: Option<String>,
}

impl RecipeIngredient {
    pub fn new(
        recipe_id: Uuid,
        position: i32,
        name: &str,
        quantity: Option<f64>,
        unit: Option<String>,
        note: Option<String>,
    ) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Invalid(
                "ingredient name is required".to_string(),
            ));
        }

        if let Some(quantity) = quantity
            && (!quantity.is_finite() || quantity < 0.0)
        {
            return Err(CoreError::Invalid(format!(
                "invalid quantity {quantity} for {name}"
            )));
        }

        Ok(Self {
            id: generate_uuid_v7(),
            recipe_id,
            position,
            name: name.to_string(),
            quantity,
            unit: unit
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
            note,
        })
    }

    /// Quantity to consume for a given scale; an unspecified or zero quantity counts as one.
    pub fn scaled_quantity(&self, scale: f64) -> f64 {
        self.quantity.filter(|q| *q != 0.0).unwrap_or(1.0) * scale
    }

    pub fn unit_or_default(&self) -> &str {
        self.unit.as_deref().unwrap_or("count")
    }
}

impl IngredientName for RecipeIngredient {
    fn ingredient_name(&self) -> &str {
        &self.name
    }
}
