// Recipe storage module
// Handles SQLite persistence and validation

pub mod db;
pub mod models;
pub mod queries;
pub mod storage;
pub mod validate;

pub use db::{init_db, init_db_at, DbConnection, DbError, DbResult};
pub use models::Recipe;
pub use queries::{add_recipe, delete_recipe, get_recipe, list_recipes, update_recipe};
pub use validate::{RecipeError, RecipeResult};

/// The capability set a presentation layer programs against. Any UI (desktop,
/// web, or CLI) renders forms and lists on top of these five operations and
/// maps [`RecipeError`] values to user-visible messages.
pub trait RecipeStore {
    /// Store a new recipe after validating all fields.
    fn add(&self, name: &str, ingredients: &str, instructions: &str) -> RecipeResult<()>;
    /// Look up a recipe by exact name.
    fn get(&self, name: &str) -> RecipeResult<Option<Recipe>>;
    /// All stored recipe names, in storage order.
    fn list(&self) -> RecipeResult<Vec<String>>;
    /// Replace the ingredients and instructions of an existing recipe.
    /// Returns false when no recipe with that name exists.
    fn update(&self, name: &str, ingredients: &str, instructions: &str) -> RecipeResult<bool>;
    /// Remove a recipe. Returns false when no recipe with that name exists.
    fn delete(&self, name: &str) -> RecipeResult<bool>;
}

impl RecipeStore for DbConnection {
    fn add(&self, name: &str, ingredients: &str, instructions: &str) -> RecipeResult<()> {
        queries::add_recipe(self, name, ingredients, instructions)
    }

    fn get(&self, name: &str) -> RecipeResult<Option<Recipe>> {
        queries::get_recipe(self, name)
    }

    fn list(&self) -> RecipeResult<Vec<String>> {
        queries::list_recipes(self)
    }

    fn update(&self, name: &str, ingredients: &str, instructions: &str) -> RecipeResult<bool> {
        queries::update_recipe(self, name, ingredients, instructions)
    }

    fn delete(&self, name: &str) -> RecipeResult<bool> {
        queries::delete_recipe(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn test_store() -> DbConnection {
        let conn = Connection::open_in_memory().unwrap();
        db::init_schema(&conn).unwrap();
        DbConnection::new(conn)
    }

    // A caller that only knows the trait, the way a UI layer would.
    fn seed(store: &dyn RecipeStore) -> RecipeResult<()> {
        store.add("Pancakes", "flour, milk, eggs", "Mix.\nCook.\nServe.")
    }

    #[test]
    fn test_trait_object_round_trip() {
        let store = test_store();
        seed(&store).unwrap();

        let recipe = store.get("Pancakes").unwrap().unwrap();
        assert_eq!(recipe.ingredients, "flour, milk, eggs");
        assert_eq!(recipe.instructions, "Mix.\nCook.\nServe.");

        assert!(store.update("Pancakes", "flour, milk", "Mix.\nCook.").unwrap());
        assert!(store.delete("Pancakes").unwrap());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_cloned_handle_sees_same_data() {
        let store = test_store();
        let handle = store.clone();
        seed(&store).unwrap();

        assert!(handle.get("Pancakes").unwrap().is_some());
    }
}
