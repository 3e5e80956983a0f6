use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RequirementValidator {
    #[validate(length(min = 1, message = "ingredient name is required"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: Option<f64>,

    pub unit: Option<String>,

    pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(range(min = 1, message = "servings must be positive"))]
    pub servings: Option<i32>,

    #[serde(default)]
    #[validate(nested)]
    pub ingredients: Vec<RequirementValidator>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CookRecipeValidator {
    #[validate(range(min = 1, message = "servings must be at least 1"))]
    pub servings: u32,

    /// Servings the recipe quantities are written for; defaults to the recipe's own count.
    #[serde(default)]
    pub recipe_base_servings: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ShoppingListValidator {
    #[validate(length(min = 1, message = "at least one recipe is required"))]
    pub recipe_ids: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_requirements_are_validated() {
        let payload = CreateRecipeValidator {
            title: "Pancakes".to_string(),
            servings: Some(4),
            ingredients: vec![RequirementValidator {
                name: String::new(),
                quantity: Some(1.0),
                unit: None,
                note: None,
            }],
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_recipe_servings_must_be_positive() {
        let payload = CreateRecipeValidator {
            title: "Pancakes".to_string(),
            servings: Some(0),
            ingredients: Vec::new(),
        };
        assert!(payload.validate().is_err());

        let payload = CreateRecipeValidator {
            title: "Pancakes".to_string(),
            servings: None,
            ingredients: Vec::new(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_cook_requires_servings() {
        let zero = CookRecipeValidator {
            servings: 0,
            recipe_base_servings: None,
        };
        let two = CookRecipeValidator {
            servings: 2,
            recipe_base_servings: Some(4),
        };

        assert!(zero.validate().is_err());
        assert!(two.validate().is_ok());
    }

    #[test]
    fn test_shopping_list_requires_recipes() {
        let empty = ShoppingListValidator {
            recipe_ids: Vec::new(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_cook_payload_defaults_base_servings() {
        let payload: CookRecipeValidator = serde_json::from_str(r#"{"servings": 3}"#).unwrap();
        assert_eq!(payload.recipe_base_servings, None);
    }
}
