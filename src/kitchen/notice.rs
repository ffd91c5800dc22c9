// -----------------------------------------------------------------------------
// Informational notices shown as small modal dialogs
// -----------------------------------------------------------------------------

use super::IngredientKind;
use crate::error::MatchError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    fn new(title: &str, body: impl Into<String>) -> Self {
        Self { title: title.to_owned(), body: body.into() }
    }

    /// Confirmation after a dialog save. An empty save lists nothing.
    pub fn selection_saved(kind: IngredientKind, chosen: &[String]) -> Self {
        Self::new(
            "Selection Saved",
            format!("Selected {}: {}", kind.plural(), chosen.join(", ")),
        )
    }
}

impl From<&MatchError> for Notice {
    fn from(err: &MatchError) -> Self {
        match err {
            MatchError::NoIngredientsSelected => {
                Self::new("No Ingredients Selected", "Please select at least one ingredient.")
            }
            MatchError::NoMatchingRecipe => Self::new(
                "No Recipe Found",
                "Sorry, no matching recipe found. Try selecting different ingredients.",
            ),
        }
    }
}
