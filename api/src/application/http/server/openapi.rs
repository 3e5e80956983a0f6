use crate::application::http::{
    health::HealthApiDoc,
    pantry::router::PantryApiDoc,
    recipe::router::{HouseholdRecipeApiDoc, RecipeApiDoc, ShoppingListApiDoc},
    substitution::router::SubstitutionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pantry Keeper API"
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/households/{household_id}/pantry", api = PantryApiDoc),
        (path = "/households/{household_id}/substitutions", api = SubstitutionApiDoc),
        (path = "/households/{household_id}/recipes", api = HouseholdRecipeApiDoc),
        (path = "/households/{household_id}/shopping-list", api = ShoppingListApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_every_route() {
        let openapi = ApiDoc::openapi();
        let paths: Vec<&String> = openapi.paths.paths.keys().collect();

        for expected in [
            "/health/live",
            "/health/ready",
            "/recipes",
            "/recipes/{recipe_id}",
            "/households/{household_id}/pantry",
            "/households/{household_id}/pantry/{item_id}",
            "/households/{household_id}/substitutions",
            "/households/{household_id}/substitutions/{substitution_id}",
            "/households/{household_id}/recipes/{recipe_id}/diff",
            "/households/{household_id}/recipes/{recipe_id}/cook",
            "/households/{household_id}/recipes/ranking",
            "/households/{household_id}/shopping-list",
        ] {
            assert!(
                paths.iter().any(|path| path.as_str() == expected),
                "missing {expected}"
            );
        }
    }
}
