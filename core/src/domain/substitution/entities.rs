use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    ingredient::{SubstitutionSet, normalize_name},
};

/// Household-scoped assertion that two ingredient names are interchangeable.
///
/// Never mutated in place: edits are a delete followed by a create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Substitution {
    pub id: Uuid,
    pub household_id: Uuid,
    pub ingredient_a: String,
    pub ingredient_b: String,
    pub created_at: DateTime<Utc>,
}

impl Substitution {
    pub fn new(
        household_id: Uuid,
        ingredient_a: &str,
        ingredient_b: &str,
    ) -> Result<Self, CoreError> {
        let ingredient_a = ingredient_a.trim();
        let ingredient_b = ingredient_b.trim();

        if ingredient_a.is_empty() || ingredient_b.is_empty() {
            return Err(CoreError::Invalid(
                "both ingredient names are required".to_string(),
            ));
        }

        if normalize_name(ingredient_a) == normalize_name(ingredient_b) {
            return Err(CoreError::Invalid(
                "an ingredient cannot substitute for itself".to_string(),
            ));
        }

        let (now, timestamp) = generate_timestamp();

        Ok(Self {
            id: Uuid::new_v7(timestamp),
            household_id,
            ingredient_a: ingredient_a.to_string(),
            ingredient_b: ingredient_b.to_string(),
            created_at: now,
        })
    }

    /// Unordered, normalized identity of the pair; two rows with the same key are duplicates.
    pub fn pair_key(&self) -> (String, String) {
        let a = normalize_name(&self.ingredient_a);
        let b = normalize_name(&self.ingredient_b);
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl<'a> FromIterator<&'a Substitution> for SubstitutionSet {
    fn from_iter<I: IntoIterator<Item = &'a Substitution>>(iter: I) -> Self {
        SubstitutionSet::from_pairs(
            iter.into_iter()
                .map(|sub| (sub.ingredient_a.as_str(), sub.ingredient_b.as_str())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_names() {
        let household_id = Uuid::new_v4();
        let sub = Substitution::new(household_id, "  EVOO ", "Olive Oil").unwrap();

        assert_eq!(sub.household_id, household_id);
        assert_eq!(sub.ingredient_a, "EVOO");
        assert_eq!(sub.ingredient_b, "Olive Oil");
    }

    #[test]
    fn test_new_rejects_blank_names() {
        let result = Substitution::new(Uuid::new_v4(), "   ", "Milk");
        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[test]
    fn test_new_rejects_self_substitution() {
        let result = Substitution::new(Uuid::new_v4(), "Milk", " milk");
        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[test]
    fn test_pair_key_is_unordered() {
        let household_id = Uuid::new_v4();
        let forward = Substitution::new(household_id, "Goat Milk", "Milk").unwrap();
        let backward = Substitution::new(household_id, "milk", "GOAT MILK").unwrap();

        assert_eq!(forward.pair_key(), backward.pair_key());
    }

    #[test]
    fn test_collect_into_substitution_set() {
        let household_id = Uuid::new_v4();
        let subs = [
            Substitution::new(household_id, "Goat Milk", "Milk").unwrap(),
            Substitution::new(household_id, "EVOO", "Olive Oil").unwrap(),
        ];

        let set: SubstitutionSet = subs.iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains("olive oil", "evoo"));
    }
}
