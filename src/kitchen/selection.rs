// -----------------------------------------------------------------------------
// Selection state and the ingredient selector dialog model
// -----------------------------------------------------------------------------

use std::collections::HashSet;

use super::IngredientKind;

/// The user's current picks. Each side is replaced wholesale on save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    proteins: Vec<String>,
    veggies: Vec<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection directly, bypassing the dialogs.
    #[cfg(test)]
    pub fn from_parts<P, V>(proteins: P, veggies: V) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            proteins: proteins.into_iter().map(Into::into).collect(),
            veggies: veggies.into_iter().map(Into::into).collect(),
        }
    }

    pub fn proteins(&self) -> &[String] {
        &self.proteins
    }

    pub fn veggies(&self) -> &[String] {
        &self.veggies
    }

    pub fn get(&self, kind: IngredientKind) -> &[String] {
        match kind {
            IngredientKind::Protein => &self.proteins,
            IngredientKind::Veggie => &self.veggies,
        }
    }

    /// Overwrite one side of the selection; the other side is untouched.
    pub fn replace(&mut self, kind: IngredientKind, items: Vec<String>) {
        match kind {
            IngredientKind::Protein => self.proteins = items,
            IngredientKind::Veggie => self.veggies = items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.proteins.is_empty() && self.veggies.is_empty()
    }

    /// Union of both sides; duplicates collapse.
    pub fn available(&self) -> HashSet<&str> {
        self.proteins
            .iter()
            .chain(self.veggies.iter())
            .map(String::as_str)
            .collect()
    }
}

/// In-progress state of an open selection dialog.
///
/// A fresh selector starts with nothing ticked. Nothing reaches the
/// [`SelectionState`] until the caller commits [`IngredientSelector::chosen`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngredientSelector {
    kind: IngredientKind,
    ticked: Vec<bool>,
}

impl IngredientSelector {
    pub fn new(kind: IngredientKind) -> Self {
        Self {
            kind,
            ticked: vec![false; kind.candidates().len()],
        }
    }

    pub fn kind(&self) -> IngredientKind {
        self.kind
    }

    /// Candidates paired with their ticked flag, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.kind
            .candidates()
            .iter()
            .copied()
            .zip(self.ticked.iter().copied())
    }

    /// Flip one candidate. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.ticked.get_mut(index) {
            *flag = !*flag;
        }
    }

    #[cfg(test)]
    pub fn is_ticked(&self, index: usize) -> bool {
        self.ticked.get(index).copied().unwrap_or(false)
    }

    /// Ticked candidates, in display order.
    pub fn chosen(&self) -> Vec<String> {
        self.entries()
            .filter(|(_, ticked)| *ticked)
            .map(|(name, _)| name.to_owned())
            .collect()
    }
}
