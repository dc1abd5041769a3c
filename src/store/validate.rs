// Validation rules applied before any write
use thiserror::Error;

/// Failure modes of recipe store operations.
///
/// Display messages are suitable for showing to the user directly; the
/// presentation layer decides how to render them.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Please fill in all fields.")]
    EmptyField,
    #[error("Recipe name can only contain letters and spaces.")]
    InvalidNameCharacters,
    #[error("Recipe name cannot contain commas.")]
    NameContainsComma,
    #[error("Recipe with the same name already exists.")]
    DuplicateName,
    #[error("Storage error: {0}")]
    PersistenceFailure(#[from] rusqlite::Error),
}

pub type RecipeResult<T> = Result<T, RecipeError>;

/// Validate a candidate recipe before insertion. First failing check wins:
/// empty fields, then name characters, then commas. Uniqueness is left to the
/// primary key constraint at write time.
pub fn validate_new_recipe(
    name: &str,
    ingredients: &str,
    instructions: &str,
) -> RecipeResult<()> {
    validate_fields_nonempty(name, ingredients, instructions)?;
    validate_name(name)
}

/// An update replaces ingredients and instructions; they must stay non-empty.
/// The name is not rechecked since it was validated on add and cannot change.
pub fn validate_replacement(ingredients: &str, instructions: &str) -> RecipeResult<()> {
    if ingredients.trim().is_empty() || instructions.trim().is_empty() {
        return Err(RecipeError::EmptyField);
    }
    Ok(())
}

fn validate_fields_nonempty(
    name: &str,
    ingredients: &str,
    instructions: &str,
) -> RecipeResult<()> {
    if name.trim().is_empty() || ingredients.trim().is_empty() || instructions.trim().is_empty() {
        return Err(RecipeError::EmptyField);
    }
    Ok(())
}

/// Names are letters and whitespace only. Commas get their own error, so the
/// character check lets them through to the comma check.
fn validate_name(name: &str) -> RecipeResult<()> {
    if name
        .chars()
        .any(|c| c != ',' && !c.is_alphabetic() && !c.is_whitespace())
    {
        return Err(RecipeError::InvalidNameCharacters);
    }
    if name.contains(',') {
        return Err(RecipeError::NameContainsComma);
    }
    Ok(())
}
