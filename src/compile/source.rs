//! Image loading.
//!
//! Decodes raster assets into packed RGBA pixels. Only 8-bit RGBA input is
//! accepted; there is no conversion path for RGB, grayscale, or deeper
//! sample formats.

use std::path::Path;

use image::{ColorType, DynamicImage};

use crate::error::{IdxError, Result};
use crate::types::{Colour, Image};

/// Load and decode an image file.
pub fn load_image(path: &Path) -> Result<Image> {
    let decoded = image::open(path).map_err(|e| IdxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to load image: {}", e),
    })?;
    from_dynamic(decoded, path)
}

/// Convert an already-decoded image, rejecting anything but RGBA8.
pub fn from_dynamic(decoded: DynamicImage, path: &Path) -> Result<Image> {
    let color = decoded.color();
    if color != ColorType::Rgba8 {
        return Err(IdxError::Format {
            path: path.to_path_buf(),
            found: format!(
                "{} channel(s) of {:?}, expected 4 channels of 8-bit RGBA",
                color.channel_count(),
                color
            ),
        });
    }

    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    let pixels = rgba
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            Colour::new(r, g, b, a).packed()
        })
        .collect();
    Image::new(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_load_rgba_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("two.png");
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([0, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([0x11, 0x22, 0x33, 0x80]));
        img.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (2, 1));
        assert_eq!(loaded.pixels(), &[0xFFFF_FF00, 0x8033_2211]);
    }

    #[test]
    fn test_rejects_rgb() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])).save(&path).unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, IdxError::Format { .. }));
    }

    #[test]
    fn test_rejects_grayscale() {
        let decoded = DynamicImage::new_luma8(4, 4);
        let err = from_dynamic(decoded, Path::new("gray.png")).unwrap_err();
        assert!(matches!(err, IdxError::Format { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_image(Path::new("/nonexistent/sprite.png")).unwrap_err();
        assert!(matches!(err, IdxError::Io { .. }));
    }
}
