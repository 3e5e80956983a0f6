pub mod cook_recipe;
pub mod create_recipe;
pub mod diff_recipe;
pub mod get_recipe;
pub mod get_recipes;
pub mod rank_recipes;
pub mod shopping_list;
