use crate::{
    domain::common::{PantryKeeperConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        pantry::PostgresPantryItemRepository,
        recipe::PostgresRecipeRepository,
        substitution::PostgresSubstitutionRepository,
    },
};

pub type PantryKeeperService = Service<
    PostgresPantryItemRepository,
    PostgresSubstitutionRepository,
    PostgresRecipeRepository,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: PantryKeeperConfig) -> Result<PantryKeeperService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    Ok(Service::new(
        PostgresPantryItemRepository::new(postgres.get_db()),
        PostgresSubstitutionRepository::new(postgres.get_db()),
        PostgresRecipeRepository::new(postgres.get_db()),
        PostgresHealthCheckRepository::new(postgres.get_db()),
        config.cache,
    ))
}
