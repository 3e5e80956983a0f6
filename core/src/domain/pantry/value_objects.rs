use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    pantry::entities::PantryItem,
    recipe::entities::{Recipe, RecipeIngredient},
};

#[derive(Debug, Clone)]
pub struct AddPantryItemInput {
    pub household_id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Debug, Clone)]
pub struct DeductForServingsInput {
    pub recipe_id: Uuid,
    pub household_id: Uuid,
    pub servings: u32,
    pub recipe_base_servings: i32,
}

/// Effect of an add: either quantities merged into an existing row or a new row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum MergeOutcome {
    Merged { item: PantryItem },
    Created { item: PantryItem },
}

impl MergeOutcome {
    pub fn item(&self) -> &PantryItem {
        match self {
            MergeOutcome::Merged { item } | MergeOutcome::Created { item } => item,
        }
    }

    pub fn is_merge(&self) -> bool {
        matches!(self, MergeOutcome::Merged { .. })
    }
}

/// Recipe requirements partitioned by pantry availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDiff {
    pub have: Vec<RecipeIngredient>,
    pub missing: Vec<RecipeIngredient>,
    /// 0-100; 0.0 for a recipe without requirements.
    pub match_pct: f64,
    pub total: usize,
}

impl RecipeDiff {
    pub fn empty() -> Self {
        Self {
            have: Vec::new(),
            missing: Vec::new(),
            match_pct: 0.0,
            total: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeMatch {
    pub recipe: Recipe,
    pub diff: RecipeDiff,
}

/// One missing ingredient across the selected recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListEntry {
    pub name: String,
    pub needed_by: Vec<Uuid>,
}

/// What a deduction did to one pantry item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Deduction {
    Partial {
        item_id: Uuid,
        item_name: String,
        amount: f64,
        unit: String,
        remaining: f64,
    },
    Depleted {
        item_id: Uuid,
        item_name: String,
    },
}

impl fmt::Display for Deduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deduction::Partial {
                item_name,
                amount,
                unit,
                ..
            } => write!(f, "{amount} {unit} {item_name}"),
            Deduction::Depleted { item_name, .. } => write!(f, "used all of {item_name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduction_descriptions() {
        let partial = Deduction::Partial {
            item_id: Uuid::new_v4(),
            item_name: "Goat Milk".to_string(),
            amount: 1.0,
            unit: "cups".to_string(),
            remaining: 1.0,
        };
        let depleted = Deduction::Depleted {
            item_id: Uuid::new_v4(),
            item_name: "Eggs".to_string(),
        };

        assert_eq!(partial.to_string(), "1 cups Goat Milk");
        assert_eq!(depleted.to_string(), "used all of Eggs");
    }

    #[test]
    fn test_merge_outcome_serializes_with_effect_tag() {
        let item = PantryItem::new(Uuid::new_v4(), "Rice", 1.0, "kg").unwrap();
        let json = serde_json::to_value(MergeOutcome::Created { item }).unwrap();

        assert_eq!(json["effect"], "created");
        assert_eq!(json["item"]["name"], "Rice");
    }
}
