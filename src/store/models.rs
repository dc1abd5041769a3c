// Data models for recipe storage
use serde::{Deserialize, Serialize};

/// A stored recipe. The name is the primary key and is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
}

impl Recipe {
    /// Split the ingredients field on commas.
    ///
    /// Comma-separated ingredients are a display convention, not enforced by
    /// storage; free-form text comes back as a single item.
    pub fn ingredient_list(&self) -> Vec<&str> {
        self.ingredients
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect()
    }

    /// Split the instructions field into one step per line.
    pub fn instruction_steps(&self) -> Vec<&str> {
        self.instructions
            .lines()
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes() -> Recipe {
        Recipe {
            name: "Pancakes".to_string(),
            ingredients: "flour, milk, eggs".to_string(),
            instructions: "Mix.\nCook.\nServe.".to_string(),
        }
    }

    #[test]
    fn test_ingredient_list_splits_on_commas() {
        assert_eq!(pancakes().ingredient_list(), vec!["flour", "milk", "eggs"]);
    }

    #[test]
    fn test_ingredient_list_free_form() {
        let recipe = Recipe {
            ingredients: "a pinch of salt".to_string(),
            ..pancakes()
        };
        assert_eq!(recipe.ingredient_list(), vec!["a pinch of salt"]);
    }

    #[test]
    fn test_instruction_steps_one_per_line() {
        assert_eq!(pancakes().instruction_steps(), vec!["Mix.", "Cook.", "Serve."]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let recipe = Recipe {
            instructions: "Mix.\n\n  \nCook.".to_string(),
            ..pancakes()
        };
        assert_eq!(recipe.instruction_steps(), vec!["Mix.", "Cook."]);
    }
}
