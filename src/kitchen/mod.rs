// kitchen/mod.rs
mod catalog;
mod ingredient;
mod matcher;
mod notice;
mod recipe;
mod selection;
mod session;

pub use catalog::Catalog;
pub use ingredient::IngredientKind;
pub use matcher::find_recipe;
pub use notice::Notice;
pub use recipe::{Recipe, RecipeCard};
pub use selection::{IngredientSelector, SelectionState};
pub use session::KitchenSession;
