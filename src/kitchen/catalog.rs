//! Recipe catalog: the fixed, ordered table of known recipes.
//!
//! The shipped table lives in `assets/recipes.toml` and is compiled into the
//! binary. Table order is the search order used by the matcher.

use std::collections::HashSet;

use serde::Deserialize;

use super::Recipe;
use crate::error::CatalogError;

const BUILTIN_RECIPES: &str = include_str!("../../assets/recipes.toml");

/// On-disk shape of a recipe table: a list of `[[recipe]]` tables.
#[derive(Deserialize)]
struct RecipeTable {
    #[serde(default, rename = "recipe")]
    recipes: Vec<Recipe>,
}

#[derive(Clone, Debug)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Catalog built from the table compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_RECIPES)
    }

    /// Parse a recipe table. Recipes keep their document order.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let table: RecipeTable = toml::from_str(source)?;
        Self::from_recipes(table.recipes)
    }

    /// Validate and wrap an ordered list of recipes.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(recipes.len());
        for (index, recipe) in recipes.iter().enumerate() {
            if recipe.name().trim().is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if recipe.ingredients().is_empty() {
                return Err(CatalogError::NoIngredients(recipe.name().to_owned()));
            }
            if !seen.insert(recipe.name()) {
                return Err(CatalogError::DuplicateRecipe(recipe.name().to_owned()));
            }
        }
        Ok(Self { recipes })
    }

    /// All recipes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name() == name)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
