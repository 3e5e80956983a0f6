//! Process-local store implementing every repository port, compiled for tests only.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Instant,
};

use parking_lot::Mutex;
use tracing::warn;
use uuid::Uuid;

use crate::domain::{
    common::{CacheConfig, entities::app_errors::CoreError, services::Service},
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    pantry::{entities::PantryItem, ports::PantryItemRepository},
    recipe::{
        entities::{Recipe, RecipeIngredient},
        ports::RecipeRepository,
    },
    substitution::{entities::Substitution, ports::SubstitutionRepository},
};

pub type InMemoryService = Service<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore>;

#[derive(Debug, Default)]
struct Tables {
    pantry_items: Vec<PantryItem>,
    substitutions: Vec<Substitution>,
    recipes: Vec<Recipe>,
    recipe_ingredients: Vec<RecipeIngredient>,
}

#[derive(Debug, Clone)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    available: Arc<AtomicBool>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            tables: Arc::default(),
            available: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a service whose four ports all share this store.
    pub fn service(&self, cache: CacheConfig) -> InMemoryService {
        Service::new(self.clone(), self.clone(), self.clone(), self.clone(), cache)
    }

    /// Simulates an outage; every port call fails with `StoreUnavailable` while false.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Writes a substitution directly, skipping the service and its cache.
    pub fn insert_substitution(&self, substitution: Substitution) {
        self.tables.lock().substitutions.push(substitution);
    }

    /// Stores a recipe and its requirements in the given order.
    pub(crate) fn seed_recipe(
        &self,
        title: &str,
        servings: Option<i32>,
        ingredients: &[(&str, Option<f64>, Option<&str>)],
    ) -> Recipe {
        let recipe = Recipe::new(title, servings).unwrap();

        let mut tables = self.tables.lock();
        for (position, (name, quantity, unit)) in ingredients.iter().enumerate() {
            let ingredient = RecipeIngredient::new(
                recipe.id,
                position as i32,
                name,
                *quantity,
                unit.map(str::to_string),
                None,
            )
            .unwrap();
            tables.recipe_ingredients.push(ingredient);
        }
        tables.recipes.push(recipe.clone());

        recipe
    }

    pub fn ingredients(&self, recipe_id: Uuid) -> Vec<RecipeIngredient> {
        let mut ingredients: Vec<_> = self
            .tables
            .lock()
            .recipe_ingredients
            .iter()
            .filter(|ingredient| ingredient.recipe_id == recipe_id)
            .cloned()
            .collect();
        ingredients.sort_by_key(|ingredient| ingredient.position);
        ingredients
    }

    fn check(&self) -> Result<(), CoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            warn!("in-memory store marked unavailable");
            Err(CoreError::StoreUnavailable(
                "in-memory store is offline".to_string(),
            ))
        }
    }
}

impl PantryItemRepository for InMemoryStore {
    async fn fetch_items_by_household(&self, household_id: Uuid) -> Result<Vec<PantryItem>, CoreError> {
        self.check()?;

        let mut items: Vec<_> = self
            .tables
            .lock()
            .pantry_items
            .iter()
            .filter(|item| item.household_id == household_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(items)
    }

    async fn count_items_by_household(&self, household_id: Uuid) -> Result<u64, CoreError> {
        self.check()?;

        let count = self
            .tables
            .lock()
            .pantry_items
            .iter()
            .filter(|item| item.household_id == household_id)
            .count();

        Ok(count as u64)
    }

    async fn get_item_by_id(
        &self,
        item_id: Uuid,
        household_id: Uuid,
    ) -> Result<Option<PantryItem>, CoreError> {
        self.check()?;

        Ok(self
            .tables
            .lock()
            .pantry_items
            .iter()
            .find(|item| item.id == item_id && item.household_id == household_id)
            .cloned())
    }

    async fn create_item(&self, item: PantryItem) -> Result<PantryItem, CoreError> {
        self.check()?;

        self.tables.lock().pantry_items.push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, item: PantryItem) -> Result<PantryItem, CoreError> {
        self.check()?;

        let mut tables = self.tables.lock();
        let stored = tables
            .pantry_items
            .iter_mut()
            .find(|stored| stored.id == item.id && stored.household_id == item.household_id)
            .ok_or(CoreError::NotFound)?;
        *stored = item.clone();

        Ok(item)
    }

    async fn delete_item(&self, item_id: Uuid, household_id: Uuid) -> Result<(), CoreError> {
        self.check()?;

        self.tables
            .lock()
            .pantry_items
            .retain(|item| !(item.id == item_id && item.household_id == household_id));

        Ok(())
    }
}

impl SubstitutionRepository for InMemoryStore {
    async fn fetch_all_substitutions(&self) -> Result<Vec<Substitution>, CoreError> {
        self.check()?;

        Ok(self.tables.lock().substitutions.clone())
    }

    async fn fetch_substitutions_by_household(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<Substitution>, CoreError> {
        self.check()?;

        Ok(self
            .tables
            .lock()
            .substitutions
            .iter()
            .filter(|sub| sub.household_id == household_id)
            .cloned()
            .collect())
    }

    async fn create_substitution(&self, substitution: Substitution) -> Result<Substitution, CoreError> {
        self.check()?;

        let mut tables = self.tables.lock();
        let key = substitution.pair_key();
        let duplicate = tables
            .substitutions
            .iter()
            .any(|sub| sub.household_id == substitution.household_id && sub.pair_key() == key);
        if duplicate {
            return Err(CoreError::DuplicateSubstitution);
        }

        tables.substitutions.push(substitution.clone());
        Ok(substitution)
    }

    async fn delete_substitution(
        &self,
        substitution_id: Uuid,
        household_id: Uuid,
    ) -> Result<bool, CoreError> {
        self.check()?;

        let mut tables = self.tables.lock();
        let before = tables.substitutions.len();
        tables
            .substitutions
            .retain(|sub| !(sub.id == substitution_id && sub.household_id == household_id));

        Ok(tables.substitutions.len() < before)
    }
}

impl RecipeRepository for InMemoryStore {
    async fn get_recipe_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        self.check()?;

        Ok(self
            .tables
            .lock()
            .recipes
            .iter()
            .find(|recipe| recipe.id == recipe_id)
            .cloned())
    }

    async fn fetch_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        self.check()?;

        let mut recipes = self.tables.lock().recipes.clone();
        recipes.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(recipes)
    }

    async fn fetch_ingredients_by_recipe(
        &self,
        recipe_id: Uuid,
    ) -> Result<Vec<RecipeIngredient>, CoreError> {
        self.check()?;

        Ok(self.ingredients(recipe_id))
    }

    async fn create_recipe(
        &self,
        recipe: Recipe,
        ingredients: Vec<RecipeIngredient>,
    ) -> Result<Recipe, CoreError> {
        self.check()?;

        let mut tables = self.tables.lock();
        tables.recipe_ingredients.extend(ingredients);
        tables.recipes.push(recipe.clone());

        Ok(recipe)
    }
}

impl HealthCheckRepository for InMemoryStore {
    async fn health(&self) -> Result<u64, CoreError> {
        let start = Instant::now();
        self.check()?;
        Ok(start.elapsed().as_millis() as u64)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let response_time_ms = self.health().await?;

        Ok(DatabaseHealthStatus {
            status: "healthy".to_string(),
            response_time_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_items_are_ordered_by_name_then_id() {
        let store = InMemoryStore::new();
        let household_id = Uuid::new_v4();
        for name in ["Rice", "Beans", "Apples"] {
            store
                .create_item(PantryItem::new(household_id, name, 1.0, "count").unwrap())
                .await
                .unwrap();
        }

        let names: Vec<String> = store
            .fetch_items_by_household(household_id)
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();

        assert_eq!(names, vec!["Apples", "Beans", "Rice"]);
    }

    #[tokio::test]
    async fn test_update_of_missing_item_is_not_found() {
        let store = InMemoryStore::new();
        let item = PantryItem::new(Uuid::new_v4(), "Rice", 1.0, "cups").unwrap();

        assert_eq!(store.update_item(item).await.unwrap_err(), CoreError::NotFound);
    }

    #[tokio::test]
    async fn test_create_recipe_keeps_requirement_order() {
        let store = InMemoryStore::new();
        let recipe = Recipe::new("Chili", Some(6)).unwrap();
        let ingredients = vec![
            RecipeIngredient::new(recipe.id, 1, "Beans", Some(2.0), None, None).unwrap(),
            RecipeIngredient::new(recipe.id, 0, "Beef", Some(1.0), Some("lbs".into()), None).unwrap(),
        ];

        store.create_recipe(recipe.clone(), ingredients).await.unwrap();

        let names: Vec<String> = store
            .fetch_ingredients_by_recipe(recipe.id)
            .await
            .unwrap()
            .into_iter()
            .map(|ingredient| ingredient.name)
            .collect();
        assert_eq!(names, vec!["Beef", "Beans"]);
        assert_eq!(store.get_recipe_by_id(recipe.id).await.unwrap(), Some(recipe));
    }
}
