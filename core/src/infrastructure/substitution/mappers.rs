use crate::{domain::substitution::entities::Substitution, entity::ingredient_substitutions};

impl From<&ingredient_substitutions::Model> for Substitution {
    fn from(model: &ingredient_substitutions::Model) -> Self {
        Self {
            id: model.id,
            household_id: model.household_id,
            ingredient_a: model.ingredient_a.clone(),
            ingredient_b: model.ingredient_b.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<ingredient_substitutions::Model> for Substitution {
    fn from(model: ingredient_substitutions::Model) -> Self {
        Self::from(&model)
    }
}
