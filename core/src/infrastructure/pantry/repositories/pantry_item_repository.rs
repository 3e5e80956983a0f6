use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        pantry::{entities::PantryItem, ports::PantryItemRepository},
    },
    entity::pantry_items::{ActiveModel, Column, Entity},
    infrastructure::db::postgres::map_db_error,
};

#[derive(Debug, Clone)]
pub struct PostgresPantryItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresPantryItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(item: &PantryItem) -> ActiveModel {
    ActiveModel {
        id: Set(item.id),
        household_id: Set(item.household_id),
        name: Set(item.name.clone()),
        quantity: Set(item.quantity),
        unit: Set(item.unit.clone()),
        created_at: Set(item.created_at.fixed_offset()),
        updated_at: Set(item.updated_at.fixed_offset()),
    }
}

impl PantryItemRepository for PostgresPantryItemRepository {
    async fn fetch_items_by_household(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<PantryItem>, CoreError> {
        let items = Entity::find()
            .filter(Column::HouseholdId.eq(household_id))
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| map_db_error("fetch pantry items", e))?;

        Ok(items.into_iter().map(PantryItem::from).collect())
    }

    async fn count_items_by_household(&self, household_id: Uuid) -> Result<u64, CoreError> {
        Entity::find()
            .filter(Column::HouseholdId.eq(household_id))
            .count(&self.db)
            .await
            .map_err(|e| map_db_error("count pantry items", e))
    }

    async fn get_item_by_id(
        &self,
        item_id: Uuid,
        household_id: Uuid,
    ) -> Result<Option<PantryItem>, CoreError> {
        let item = Entity::find_by_id(item_id)
            .filter(Column::HouseholdId.eq(household_id))
            .one(&self.db)
            .await
            .map_err(|e| map_db_error("get pantry item", e))?;

        Ok(item.map(PantryItem::from))
    }

    async fn create_item(&self, item: PantryItem) -> Result<PantryItem, CoreError> {
        let created = Entity::insert(to_active_model(&item))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_db_error("create pantry item", e))?;

        Ok(PantryItem::from(created))
    }

    async fn update_item(&self, item: PantryItem) -> Result<PantryItem, CoreError> {
        let result = Entity::update_many()
            .set(ActiveModel {
                name: Set(item.name.clone()),
                quantity: Set(item.quantity),
                unit: Set(item.unit.clone()),
                updated_at: Set(item.updated_at.fixed_offset()),
                ..Default::default()
            })
            .filter(Column::Id.eq(item.id))
            .filter(Column::HouseholdId.eq(item.household_id))
            .exec(&self.db)
            .await
            .map_err(|e| map_db_error("update pantry item", e))?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(item)
    }

    async fn delete_item(&self, item_id: Uuid, household_id: Uuid) -> Result<(), CoreError> {
        Entity::delete_many()
            .filter(Column::Id.eq(item_id))
            .filter(Column::HouseholdId.eq(household_id))
            .exec(&self.db)
            .await
            .map_err(|e| map_db_error("delete pantry item", e))?;

        Ok(())
    }
}
