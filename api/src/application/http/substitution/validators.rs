use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_distinct_ingredients", skip_on_field_errors = true))]
pub struct CreateSubstitutionValidator {
    #[validate(length(min = 1, message = "ingredient_a is required"))]
    pub ingredient_a: String,

    #[validate(length(min = 1, message = "ingredient_b is required"))]
    pub ingredient_b: String,
}

fn validate_distinct_ingredients(
    payload: &CreateSubstitutionValidator,
) -> Result<(), ValidationError> {
    if payload.ingredient_a.trim().to_lowercase() == payload.ingredient_b.trim().to_lowercase() {
        let mut error = ValidationError::new("same_ingredient");
        error.message = Some("an ingredient cannot substitute for itself".into());
        return Err(error);
    }
    Ok(())
}
