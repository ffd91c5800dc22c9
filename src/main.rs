//! Program entry point: loads the recipe table and pictures, configures the
//! window, and launches the egui/eframe UI.

mod assets;
mod config;
mod error;
mod kitchen;
mod ui;

use eframe::{egui, NativeOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

use assets::Assets;
use config::AppConfig;
use error::AppError;
use kitchen::{Catalog, KitchenSession};
use ui::GranRecipes;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::default();

    let catalog = Catalog::builtin()?;
    info!(recipes = catalog.len(), "recipe catalog loaded");

    // Missing pictures end the program here, before any window is shown.
    let assets = Assets::load(&config)?;
    let session = KitchenSession::new(catalog);

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.initial_window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title(config.window_title.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        &config.window_title,
        native_options,
        Box::new(move |cc| Box::new(GranRecipes::new(cc, session, assets))),
    )?;
    Ok(())
}
