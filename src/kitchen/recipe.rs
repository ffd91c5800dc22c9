// -----------------------------------------------------------------------------
// Recipe record and its display card
// -----------------------------------------------------------------------------

use serde::Deserialize;

/// One entry of the recipe table. Immutable once the catalog is built.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    name: String,
    ingredients: Vec<String>,
    time: String,
    steps: Vec<String>,
    calories: String,
}

impl Recipe {
    #[cfg(test)]
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        ingredients: impl IntoIterator<Item = S>,
        time: impl Into<String>,
        steps: impl IntoIterator<Item = S>,
        calories: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            time: time.into(),
            steps: steps.into_iter().map(Into::into).collect(),
            calories: calories.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required ingredients, in table order.
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn calories(&self) -> &str {
        &self.calories
    }
}

/// Text of a recipe window: its title and the lines shown top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeCard {
    title: String,
    lines: Vec<String>,
}

impl RecipeCard {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let mut lines = Vec::with_capacity(5 + recipe.steps().len());
        lines.push(format!("Recipe: {}", recipe.name()));
        lines.push(format!("Ingredients: {}", recipe.ingredients().join(", ")));
        lines.push(format!("Time to Cook: {}", recipe.time()));
        lines.push(format!("Calories: {}", recipe.calories()));
        lines.push("Cooking Steps:".to_owned());
        lines.extend(recipe.steps().iter().map(|step| format!("- {step}")));

        Self { title: recipe.name().to_owned(), lines }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_lists_details_then_steps() {
        let recipe = Recipe::new(
            "Beef Stew",
            ["Beef", "Potato", "Carrot", "Onion"],
            "1 hour",
            ["Brown the beef", "Add vegetables and simmer", "Serve hot"],
            "450 kcal",
        );

        let card = RecipeCard::from_recipe(&recipe);
        assert_eq!(card.title(), "Beef Stew");
        assert_eq!(
            card.lines(),
            [
                "Recipe: Beef Stew",
                "Ingredients: Beef, Potato, Carrot, Onion",
                "Time to Cook: 1 hour",
                "Calories: 450 kcal",
                "Cooking Steps:",
                "- Brown the beef",
                "- Add vegetables and simmer",
                "- Serve hot",
            ]
        );
    }

    #[test]
    fn card_without_steps_still_has_heading() {
        let recipe = Recipe::new("Toast", ["Bread"], "2 mins", Vec::<&str>::new(), "80 kcal");
        let card = RecipeCard::from_recipe(&recipe);
        assert_eq!(card.lines().last().map(String::as_str), Some("Cooking Steps:"));
    }
}
