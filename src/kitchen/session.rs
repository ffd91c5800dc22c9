//! Kitchen session — the application state behind the main window.
//!
//! Owns the catalog, the current selection, the open selector dialog, the
//! pending notice and the open recipe windows. The UI layer only reads this
//! state and forwards clicks to it, so every flow can be driven without a
//! window.
//!
//! Modal rules:
//! - At most one selector dialog is open; opening another replaces it.
//! - While a selector or a notice is open the main-window actions are ignored.

use tracing::info;

use super::{
    find_recipe, Catalog, IngredientKind, IngredientSelector, Notice, RecipeCard, SelectionState,
};
use crate::error::MatchError;

/// A recipe window opened by a successful lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeWindow {
    pub id: u64,
    pub card: RecipeCard,
}

pub struct KitchenSession {
    catalog: Catalog,
    selection: SelectionState,
    selector: Option<IngredientSelector>,
    notice: Option<Notice>,
    recipe_windows: Vec<RecipeWindow>,
    next_window_id: u64,
}

impl KitchenSession {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: SelectionState::new(),
            selector: None,
            notice: None,
            recipe_windows: Vec::new(),
            next_window_id: 0,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selector(&self) -> Option<&IngredientSelector> {
        self.selector.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn recipe_windows(&self) -> &[RecipeWindow] {
        &self.recipe_windows
    }

    /// True while a dialog blocks the main window.
    pub fn is_modal(&self) -> bool {
        self.selector.is_some() || self.notice.is_some()
    }

    // -----------------------------
    // Selector dialog
    // -----------------------------

    pub fn open_selector(&mut self, kind: IngredientKind) {
        if self.notice.is_some() {
            return;
        }
        self.selector = Some(IngredientSelector::new(kind));
    }

    pub fn toggle_candidate(&mut self, index: usize) {
        if let Some(selector) = &mut self.selector {
            selector.toggle(index);
        }
    }

    /// Commit the open dialog: replace that side of the selection, close the
    /// dialog and confirm with a notice.
    pub fn save_selector(&mut self) {
        let Some(selector) = self.selector.take() else {
            return;
        };
        let kind = selector.kind();
        let chosen = selector.chosen();
        info!(kind = kind.plural(), chosen = ?chosen, "selection saved");

        self.notice = Some(Notice::selection_saved(kind, &chosen));
        self.selection.replace(kind, chosen);
    }

    /// Close the dialog without saving.
    pub fn close_selector(&mut self) {
        self.selector = None;
    }

    // -----------------------------
    // Lookup & results
    // -----------------------------

    /// Run the matcher on the current selection. A hit opens a recipe
    /// window; a miss raises a notice. Ignored while a dialog is open.
    pub fn find_recipe(&mut self) -> Option<Result<String, MatchError>> {
        if self.is_modal() {
            return None;
        }

        match find_recipe(&self.catalog, &self.selection) {
            Ok(recipe) => {
                let name = recipe.name().to_owned();
                let window = RecipeWindow { id: self.next_window_id, card: RecipeCard::from_recipe(recipe) };
                self.next_window_id += 1;
                self.recipe_windows.push(window);
                Some(Ok(name))
            }
            Err(err) => {
                self.notice = Some(Notice::from(&err));
                Some(Err(err))
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn close_recipe_window(&mut self, id: u64) {
        self.recipe_windows.retain(|window| window.id != id);
    }
}
