// Database CRUD operations
use rusqlite::params;

use super::db::DbConnection;
use super::models::Recipe;
use super::validate::{validate_new_recipe, validate_replacement, RecipeError, RecipeResult};

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// Add a new recipe. Validates every field first; nothing is written on a
/// validation failure. A name collision surfaces as `DuplicateName`.
pub fn add_recipe(
    db: &DbConnection,
    name: &str,
    ingredients: &str,
    instructions: &str,
) -> RecipeResult<()> {
    validate_new_recipe(name, ingredients, instructions)?;

    let conn = db.lock();
    let result = conn.execute(
        "INSERT INTO recipes (name, ingredients, instructions) VALUES (?1, ?2, ?3)",
        params![name, ingredients, instructions],
    );

    match result {
        Ok(_) => {
            log::debug!("Added recipe '{}'", name);
            Ok(())
        }
        Err(e) if is_constraint_violation(&e) => Err(RecipeError::DuplicateName),
        Err(e) => Err(e.into()),
    }
}

/// Get a recipe by exact name. The key is used as passed, with no trimming
/// or normalization.
pub fn get_recipe(db: &DbConnection, name: &str) -> RecipeResult<Option<Recipe>> {
    let conn = db.lock();
    let mut stmt = conn.prepare(
        "SELECT name, ingredients, instructions FROM recipes WHERE name = ?1",
    )?;

    let result = stmt.query_row([name], |row| {
        Ok(Recipe {
            name: row.get(0)?,
            ingredients: row.get(1)?,
            instructions: row.get(2)?,
        })
    });

    match result {
        Ok(recipe) => Ok(Some(recipe)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// List every stored recipe name in storage order. Not sorted; callers that
/// want alphabetical output sort it themselves.
pub fn list_recipes(db: &DbConnection) -> RecipeResult<Vec<String>> {
    let conn = db.lock();
    let mut stmt = conn.prepare("SELECT name FROM recipes")?;

    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;

    Ok(names)
}

/// Replace the ingredients and instructions of an existing recipe. The name
/// is the immutable key. Returns `Ok(false)` when no recipe matched; a
/// missing name is not an error and never creates a new entry.
pub fn update_recipe(
    db: &DbConnection,
    name: &str,
    new_ingredients: &str,
    new_instructions: &str,
) -> RecipeResult<bool> {
    validate_replacement(new_ingredients, new_instructions)?;

    let conn = db.lock();
    let changed = conn.execute(
        "UPDATE recipes SET ingredients = ?1, instructions = ?2 WHERE name = ?3",
        params![new_ingredients, new_instructions, name],
    )?;

    if changed > 0 {
        log::debug!("Updated recipe '{}'", name);
    }
    Ok(changed > 0)
}

/// Delete the recipe with the exact matching name. Returns `Ok(false)` when
/// nothing matched; deleting a nonexistent name is not an error.
pub fn delete_recipe(db: &DbConnection, name: &str) -> RecipeResult<bool> {
    let conn = db.lock();
    let removed = conn.execute("DELETE FROM recipes WHERE name = ?1", params![name])?;

    if removed > 0 {
        log::debug!("Deleted recipe '{}'", name);
    }
    Ok(removed > 0)
}
