//! Store-free reconciliation steps. Services load the records, these functions
//! decide, and the services apply the resulting writes in order.

use std::cmp::Ordering;

use uuid::Uuid;

use crate::domain::{
    ingredient::{SubstitutionSet, find_match, names_match},
    pantry::{
        entities::PantryItem,
        value_objects::{Deduction, RecipeDiff, RecipeMatch, ShoppingListEntry},
    },
    recipe::entities::RecipeIngredient,
};

/// A base of zero or less is treated as one serving.
pub fn scale_factor(servings: u32, recipe_base_servings: i32) -> f64 {
    f64::from(servings) / f64::from(recipe_base_servings.max(1))
}

pub fn round_quantity(quantity: f64) -> f64 {
    (quantity * 100.0).round() / 100.0
}

pub fn diff_requirements(
    requirements: Vec<RecipeIngredient>,
    pantry: &[PantryItem],
    substitutions: &SubstitutionSet,
) -> RecipeDiff {
    let total = requirements.len();
    if total == 0 {
        return RecipeDiff::empty();
    }

    let (have, missing): (Vec<_>, Vec<_>) = requirements
        .into_iter()
        .partition(|requirement| find_match(&requirement.name, pantry, substitutions).is_some());

    let match_pct = 100.0 * have.len() as f64 / total as f64;

    RecipeDiff {
        have,
        missing,
        match_pct,
        total,
    }
}

/// Best match first; ties broken by title so the ranking is stable.
pub fn sort_matches(matches: &mut [RecipeMatch]) {
    matches.sort_by(|a, b| {
        b.diff
            .match_pct
            .partial_cmp(&a.diff.match_pct)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.recipe.title.cmp(&b.recipe.title))
    });
}

/// Store mutation produced by a deduction.
#[derive(Debug, Clone, PartialEq)]
pub enum PantryWrite {
    Update(PantryItem),
    Delete { item_id: Uuid, household_id: Uuid },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeductionStep {
    pub write: PantryWrite,
    pub deduction: Deduction,
}

/// Walks requirements in order against a snapshot that advances after every
/// step, so two requirements resolving to one item compound instead of both
/// reading the original quantity. Requirements without a matching item are skipped.
pub fn plan_deductions(
    requirements: &[RecipeIngredient],
    mut snapshot: Vec<PantryItem>,
    scale: f64,
    substitutions: &SubstitutionSet,
) -> Vec<DeductionStep> {
    let mut steps = Vec::new();

    for requirement in requirements {
        let Some(index) = snapshot
            .iter()
            .position(|item| names_match(&requirement.name, &item.name, substitutions))
        else {
            continue;
        };

        let needed = requirement.scaled_quantity(scale);
        let new_quantity = snapshot[index].quantity - needed;

        if new_quantity <= 0.0 {
            let item = snapshot.remove(index);
            steps.push(DeductionStep {
                write: PantryWrite::Delete {
                    item_id: item.id,
                    household_id: item.household_id,
                },
                deduction: Deduction::Depleted {
                    item_id: item.id,
                    item_name: item.name,
                },
            });
            continue;
        }

        let item = &mut snapshot[index];
        item.quantity = new_quantity;

        let mut stored = item.clone();
        stored.quantity = round_quantity(new_quantity);
        stored.updated_at = chrono::Utc::now();

        steps.push(DeductionStep {
            deduction: Deduction::Partial {
                item_id: item.id,
                item_name: item.name.clone(),
                amount: round_quantity(needed),
                unit: requirement.unit_or_default().to_string(),
                remaining: stored.quantity,
            },
            write: PantryWrite::Update(stored),
        });
    }

    steps
}

/// Union of missing requirements, merged through the matcher so that
/// "Tomato" and "Tomatoes" needed by two recipes appear once.
pub fn build_shopping_list(
    diffs: &[(Uuid, RecipeDiff)],
    substitutions: &SubstitutionSet,
) -> Vec<ShoppingListEntry> {
    let mut entries: Vec<ShoppingListEntry> = Vec::new();

    for (recipe_id, diff) in diffs {
        for requirement in &diff.missing {
            let existing = entries
                .iter_mut()
                .find(|entry| names_match(&requirement.name, &entry.name, substitutions));

            match existing {
                Some(entry) => {
                    if !entry.needed_by.contains(recipe_id) {
                        entry.needed_by.push(*recipe_id);
                    }
                }
                None => entries.push(ShoppingListEntry {
                    name: requirement.name.clone(),
                    needed_by: vec![*recipe_id],
                }),
            }
        }
    }

    entries
}
