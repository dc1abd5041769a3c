// Recipe Book - storage core for a desktop recipe manager
//
// The presentation layer (whatever renders windows, forms, and lists) holds a
// store handle from `init_db` and drives it through the `RecipeStore` trait.
// All validation and persistence lives here; all rendering lives there.

pub mod store;

pub use store::{
    add_recipe, delete_recipe, get_recipe, init_db, init_db_at, list_recipes, update_recipe,
    DbConnection, DbError, DbResult, Recipe, RecipeError, RecipeResult, RecipeStore,
};
