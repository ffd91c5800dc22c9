//! Image assets, decoded once at startup before the window opens.
//!
//! A missing or undecodable picture is fatal: the error is returned to `main`
//! and the program exits without showing a window.

use eframe::egui::ColorImage;
use image::imageops::FilterType;
use tracing::debug;

use crate::config::{AppConfig, ImageSpec};
use crate::error::AssetError;
use crate::kitchen::IngredientKind;

/// RGBA8 pixels already scaled to their display size.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub pixels_rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied([self.width, self.height], &self.pixels_rgba)
    }
}

/// Every picture the UI shows.
pub struct Assets {
    pub mascot: DecodedImage,
    pub protein: DecodedImage,
    pub veggies: DecodedImage,
}

impl Assets {
    pub fn load(config: &AppConfig) -> Result<Self, AssetError> {
        Ok(Self {
            mascot: load_image(&config.mascot_image)?,
            protein: load_image(config.selector_image(IngredientKind::Protein))?,
            veggies: load_image(config.selector_image(IngredientKind::Veggie))?,
        })
    }
}

/// Decode an image from disk and resize it to exactly `spec`'s size.
pub fn load_image(spec: &ImageSpec) -> Result<DecodedImage, AssetError> {
    let dyn_img = image::open(&spec.path).map_err(|err| match err {
        image::ImageError::IoError(source) => AssetError::Io { path: spec.path.clone(), source },
        source => AssetError::Decode { path: spec.path.clone(), source },
    })?;

    let rgba_img = dyn_img
        .resize_exact(spec.width, spec.height, FilterType::Triangle)
        .to_rgba8();
    let (w, h) = rgba_img.dimensions();
    debug!(path = %spec.path.display(), width = w, height = h, "image loaded");

    Ok(DecodedImage {
        width: w as usize,
        height: h as usize,
        pixels_rgba: rgba_img.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn loads_and_resizes_to_display_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mascot.png");
        image::RgbaImage::from_pixel(8, 6, image::Rgba([200, 100, 50, 255]))
            .save(&path)
            .unwrap();

        let spec = ImageSpec { path, width: 4, height: 4 };
        let decoded = load_image(&spec).unwrap();
        assert_eq!((decoded.width, decoded.height), (4, 4));
        assert_eq!(decoded.pixels_rgba.len(), 4 * 4 * 4);
        assert_eq!(decoded.pixels_rgba[3], 255);

        let color = decoded.to_color_image();
        assert_eq!(color.size, [4, 4]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let spec = ImageSpec { path: dir.path().join("protein.jpg"), width: 10, height: 10 };
        assert!(matches!(load_image(&spec), Err(AssetError::Io { .. })));
    }

    #[test]
    fn garbage_file_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("veggies.jpg");
        fs::write(&path, b"definitely not a jpeg").unwrap();

        let spec = ImageSpec { path, width: 10, height: 10 };
        assert!(matches!(load_image(&spec), Err(AssetError::Decode { .. })));
    }
}
