//! Ingredient-to-recipe matching.
//!
//! A recipe matches when every ingredient it lists is among the selected
//! proteins and veggies; extra selections are ignored. The catalog is
//! scanned in table order and the first match wins, so when several recipes
//! are satisfiable the earliest one is returned.

use std::collections::HashSet;

use tracing::{debug, info};

use super::{Catalog, Recipe, SelectionState};
use crate::error::MatchError;

/// Look up the recipe for the current selection.
pub fn find_recipe<'c>(
    catalog: &'c Catalog,
    selection: &SelectionState,
) -> Result<&'c Recipe, MatchError> {
    if selection.is_empty() {
        debug!("find requested with no ingredients selected");
        return Err(MatchError::NoIngredientsSelected);
    }

    info!(
        proteins = ?selection.proteins(),
        veggies = ?selection.veggies(),
        "finding recipe"
    );

    let available = selection.available();
    match first_satisfied(catalog, &available) {
        Some(recipe) => {
            info!(recipe = recipe.name(), "recipe found");
            Ok(recipe)
        }
        None => {
            info!("no matching recipe found");
            Err(MatchError::NoMatchingRecipe)
        }
    }
}

/// First recipe in table order whose ingredients are all in `available`.
pub fn first_satisfied<'c>(catalog: &'c Catalog, available: &HashSet<&str>) -> Option<&'c Recipe> {
    catalog.iter().find(|recipe| is_satisfied(recipe, available))
}

#[inline]
fn is_satisfied(recipe: &Recipe, available: &HashSet<&str>) -> bool {
    recipe
        .ingredients()
        .iter()
        .all(|ingredient| available.contains(ingredient.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitchen::IngredientKind;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn exact_selection_finds_chicken_salad() {
        let selection = SelectionState::from_parts(["Chicken"], ["Lettuce", "Tomato", "Cucumber"]);
        let catalog = builtin();
        let recipe = find_recipe(&catalog, &selection).unwrap();
        assert_eq!(recipe.name(), "Chicken Salad");
    }

    #[test]
    fn exact_selection_finds_beef_stew() {
        let selection = SelectionState::from_parts(["Beef"], ["Potato", "Carrot", "Onion"]);
        let catalog = builtin();
        let recipe = find_recipe(&catalog, &selection).unwrap();
        assert_eq!(recipe.name(), "Beef Stew");
    }

    #[test]
    fn empty_selection_is_reported_before_scanning() {
        // An empty catalog would otherwise report NoMatchingRecipe.
        let empty = Catalog::from_recipes(Vec::new()).unwrap();
        let selection = SelectionState::new();
        assert_eq!(find_recipe(&empty, &selection), Err(MatchError::NoIngredientsSelected));
        assert_eq!(find_recipe(&builtin(), &selection), Err(MatchError::NoIngredientsSelected));
    }

    #[test]
    fn partial_ingredients_do_not_match() {
        let selection = SelectionState::from_parts(["Chicken"], ["Cabbage"]);
        assert_eq!(find_recipe(&builtin(), &selection), Err(MatchError::NoMatchingRecipe));
    }

    #[test]
    fn extra_ingredients_are_tolerated() {
        let selection = SelectionState::from_parts(["Fish"], ["Lettuce", "Tomato", "Onion", "Carrot"]);
        let catalog = builtin();
        let recipe = find_recipe(&catalog, &selection).unwrap();
        assert_eq!(recipe.name(), "Fish Tacos");
    }

    #[test]
    fn veggies_alone_can_match() {
        let selection =
            SelectionState::from_parts(Vec::<String>::new(), ["Spinach", "Carrot", "Onion", "Cabbage"]);
        let catalog = builtin();
        let recipe = find_recipe(&catalog, &selection).unwrap();
        assert_eq!(recipe.name(), "Veggie Stir Fry");
    }

    #[test]
    fn earliest_recipe_wins_when_several_match() {
        // Everything selected satisfies every recipe.
        let selection = SelectionState::from_parts(
            IngredientKind::Protein.candidates().iter().copied(),
            IngredientKind::Veggie.candidates().iter().copied(),
        );
        let catalog = builtin();
        let recipe = find_recipe(&catalog, &selection).unwrap();
        assert_eq!(recipe.name(), "Chicken Salad");

        let mut recipes: Vec<Recipe> = catalog.iter().cloned().collect();
        recipes.reverse();
        let reordered = Catalog::from_recipes(recipes).unwrap();
        let recipe = find_recipe(&reordered, &selection).unwrap();
        assert_eq!(recipe.name(), "Veggie Stir Fry");
    }

    #[test]
    fn repeated_lookups_agree() {
        let catalog = builtin();
        let selection = SelectionState::from_parts(["Beef"], ["Potato", "Carrot", "Onion"]);
        let first = find_recipe(&catalog, &selection).map(Recipe::name);
        let second = find_recipe(&catalog, &selection).map(Recipe::name);
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_recipe_ingredients_are_tolerated() {
        let catalog = Catalog::from_recipes(vec![Recipe::new(
            "Double Onion",
            ["Onion", "Onion"],
            "5 mins",
            ["Fry"],
            "90 kcal",
        )])
        .unwrap();
        let selection = SelectionState::from_parts(Vec::<String>::new(), ["Onion"]);
        assert_eq!(find_recipe(&catalog, &selection).map(Recipe::name), Ok("Double Onion"));
    }

    #[test]
    fn matcher_accepts_arbitrary_names() {
        let catalog = Catalog::from_recipes(vec![Recipe::new(
            "Tofu Bowl",
            ["Tofu", "Rice"],
            "10 mins",
            ["Assemble"],
            "400 kcal",
        )])
        .unwrap();
        let available: HashSet<&str> = ["Rice", "Tofu", "Kale"].into_iter().collect();
        assert_eq!(first_satisfied(&catalog, &available).map(Recipe::name), Some("Tofu Bowl"));
    }
}
