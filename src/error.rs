//! Error types for the recipe finder.

use std::path::PathBuf;

use thiserror::Error;

/// Why a lookup produced no recipe. Both cases are shown to the user as a
/// notice and never end the program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Neither a protein nor a veggie has been selected
    #[error("no ingredients selected")]
    NoIngredientsSelected,

    /// No recipe can be made from the selected ingredients
    #[error("no matching recipe found")]
    NoMatchingRecipe,
}

/// Errors raised while building the recipe catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The recipe table is not valid TOML or has the wrong shape
    #[error("failed to parse recipe table: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two recipes share a name
    #[error("duplicate recipe '{0}'")]
    DuplicateRecipe(String),

    /// A recipe has a blank name
    #[error("recipe #{index} has an empty name")]
    EmptyName { index: usize },

    /// A recipe lists no ingredients and would match any selection
    #[error("recipe '{0}' has no ingredients")]
    NoIngredients(String),
}

/// Errors raised while loading an image from disk
#[derive(Error, Debug)]
pub enum AssetError {
    /// The file could not be read
    #[error("failed to read image '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a decodable image
    #[error("failed to decode image '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Fatal startup and shutdown errors, returned from `main`
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    /// The native window could not be created or the event loop failed
    #[error("UI error: {0}")]
    Ui(#[from] eframe::Error),
}
