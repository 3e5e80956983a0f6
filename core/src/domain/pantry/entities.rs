use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    ingredient::IngredientName,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PantryItem {
    pub id: Uuid,
    pub household_id: Uuid,
    /// Most recently entered variant of the ingredient name.
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PantryItem {
    pub fn new(
        household_id: Uuid,
        name: &str,
        quantity: f64,
        unit: &str,
    ) -> Result<Self, CoreError> {
        let name = validate_name(name)?;
        validate_quantity(quantity)?;
        let unit = unit.trim();
        if unit.is_empty() {
            return Err(CoreError::Invalid("unit is required".to_string()));
        }

        let (now, timestamp) = generate_timestamp();

        Ok(Self {
            id: Uuid::new_v7(timestamp),
            household_id,
            name,
            quantity,
            unit: unit.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Additive merge; units are trusted to be compatible and never converted.
    pub fn merge(&mut self, name: &str, quantity: f64) -> Result<(), CoreError> {
        let name = validate_name(name)?;
        validate_quantity(quantity)?;
        let total = self.quantity + quantity;
        validate_quantity(total)?;

        self.name = name;
        self.quantity = total;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: f64) -> Result<(), CoreError> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl IngredientName for PantryItem {
    fn ingredient_name(&self) -> &str {
        &self.name
    }
}

fn validate_name(name: &str) -> Result<String, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Invalid("item name is required".to_string()));
    }
    Ok(name.to_string())
}

fn validate_quantity(quantity: f64) -> Result<(), CoreError> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(CoreError::Invalid(format!("invalid quantity {quantity}")));
    }
    Ok(())
}
