use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};
use tracing::warn;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        substitution::{entities::Substitution, ports::SubstitutionRepository},
    },
    entity::ingredient_substitutions::{ActiveModel, Column, Entity},
    infrastructure::db::postgres::map_db_error,
};

#[derive(Debug, Clone)]
pub struct PostgresSubstitutionRepository {
    pub db: DatabaseConnection,
}

impl PostgresSubstitutionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SubstitutionRepository for PostgresSubstitutionRepository {
    async fn fetch_all_substitutions(&self) -> Result<Vec<Substitution>, CoreError> {
        let substitutions = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| map_db_error("fetch substitutions", e))?;

        Ok(substitutions.into_iter().map(Substitution::from).collect())
    }

    async fn fetch_substitutions_by_household(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<Substitution>, CoreError> {
        let substitutions = Entity::find()
            .filter(Column::HouseholdId.eq(household_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| map_db_error("fetch household substitutions", e))?;

        Ok(substitutions.into_iter().map(Substitution::from).collect())
    }

    async fn create_substitution(&self, substitution: Substitution) -> Result<Substitution, CoreError> {
        let active_model = ActiveModel {
            id: Set(substitution.id),
            household_id: Set(substitution.household_id),
            ingredient_a: Set(substitution.ingredient_a.clone()),
            ingredient_b: Set(substitution.ingredient_b.clone()),
            created_at: Set(substitution.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
                    warn!("Substitution pair already registered: {}", detail);
                    return CoreError::DuplicateSubstitution;
                }
                map_db_error("create substitution", e)
            })?;

        Ok(Substitution::from(created))
    }

    async fn delete_substitution(
        &self,
        substitution_id: Uuid,
        household_id: Uuid,
    ) -> Result<bool, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(substitution_id))
            .filter(Column::HouseholdId.eq(household_id))
            .exec(&self.db)
            .await
            .map_err(|e| map_db_error("delete substitution", e))?;

        Ok(result.rows_affected > 0)
    }
}
