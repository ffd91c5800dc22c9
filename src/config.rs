//! Compiled-in application settings.
//!
//! The program takes no flags and reads no config file; everything tunable
//! is collected here with its default.

use std::path::PathBuf;

use crate::kitchen::IngredientKind;

/// An image loaded from disk and the exact size it is shown at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSpec {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl ImageSpec {
    fn new(path: &str, width: u32, height: u32) -> Self {
        Self { path: PathBuf::from(path), width, height }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub window_title: String,
    pub initial_window_size: [f32; 2],
    pub min_window_size: [f32; 2],

    // Image paths are relative to the working directory.
    pub mascot_image: ImageSpec,
    pub protein_image: ImageSpec,
    pub veggies_image: ImageSpec,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "GranRecipes".to_owned(),
            initial_window_size: [460.0, 720.0],
            min_window_size: [300.0, 200.0],
            mascot_image: ImageSpec::new("mascot.jpg", 400, 400),
            protein_image: ImageSpec::new("protein.jpg", 100, 100),
            veggies_image: ImageSpec::new("veggies.jpg", 100, 100),
        }
    }
}

impl AppConfig {
    /// Picture shown at the top of a selector dialog.
    pub fn selector_image(&self, kind: IngredientKind) -> &ImageSpec {
        match kind {
            IngredientKind::Protein => &self.protein_image,
            IngredientKind::Veggie => &self.veggies_image,
        }
    }
}
