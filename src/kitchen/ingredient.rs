// -----------------------------------------------------------------------------
// Ingredient kinds and their fixed candidate lists
// -----------------------------------------------------------------------------

const PROTEINS: &[&str] = &["Chicken", "Beef", "Fish"];

const VEGGIES: &[&str] = &[
    "Tomato", "Onion", "Carrot", "Potato", "Cucumber", "Lettuce", "Spinach", "Cabbage",
];

/// Which of the two selection dialogs an ingredient belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IngredientKind {
    Protein,
    Veggie,
}

impl IngredientKind {
    pub const ALL: [IngredientKind; 2] = [IngredientKind::Protein, IngredientKind::Veggie];

    /// Candidates offered by the dialog, in display order.
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            IngredientKind::Protein => PROTEINS,
            IngredientKind::Veggie => VEGGIES,
        }
    }

    /// Label of the main-window button that opens the dialog.
    pub fn button_label(&self) -> &'static str {
        match self {
            IngredientKind::Protein => "Protein",
            IngredientKind::Veggie => "Veggies",
        }
    }

    pub fn dialog_title(&self) -> &'static str {
        match self {
            IngredientKind::Protein => "Select Protein",
            IngredientKind::Veggie => "Select Veggies",
        }
    }

    /// Plural noun used in confirmations ("Selected proteins: ...").
    pub fn plural(&self) -> &'static str {
        match self {
            IngredientKind::Protein => "proteins",
            IngredientKind::Veggie => "veggies",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_lists_are_disjoint() {
        for protein in IngredientKind::Protein.candidates() {
            assert!(!IngredientKind::Veggie.candidates().contains(protein));
        }
    }

    #[test]
    fn candidate_order_matches_dialogs() {
        assert_eq!(IngredientKind::Protein.candidates(), ["Chicken", "Beef", "Fish"]);
        assert_eq!(IngredientKind::Veggie.candidates().len(), 8);
        assert_eq!(IngredientKind::Veggie.candidates()[0], "Tomato");
        assert_eq!(IngredientKind::Veggie.candidates()[7], "Cabbage");
    }
}
