use crate::{
    domain::recipe::entities::{Recipe, RecipeIngredient},
    entity::{recipe_ingredients, recipes},
};

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            servings: model.servings,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<recipe_ingredients::Model> for RecipeIngredient {
    fn from(model: recipe_ingredients::Model) -> Self {
        Self {
            id: model.id,
            recipe_id: model.recipe_id,
            position: model.position,
            name: model.name,
            quantity: model.quantity,
            unit: model.unit,
            note: model.note,
        }
    }
}
