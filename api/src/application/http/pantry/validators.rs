use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddPantryItemValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: f64,

    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AdjustPantryItemValidator {
    /// New absolute quantity; zero removes the item.
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: f64,
}
