//! Image file loading.
//!
//! Decoding is delegated to the `image` crate. Color images are reduced with
//! the same ITU-R 601-2 weights as [`crate::raster::luminance`] so file and
//! buffer inputs threshold identically.

use std::path::Path;

use log::debug;
use ndarray::{Array2, Array3};

use crate::config::PathConfig;
use crate::error::{Error, Result};
use crate::pipeline::extract_path;
use crate::raster::luminance;
use crate::trace::Point;

/// Decode an image file into a (height, width) luminance plane.
pub fn load_grayscale(path: &Path) -> Result<Array2<u8>> {
    let rgba = image::open(path)?.into_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    let data = rgba.into_raw();
    let actual = data.len();

    let pixels = Array3::from_shape_vec((height, width, 4), data).map_err(|_| {
        Error::SizeMismatch {
            expected: width * height * 4,
            actual,
        }
    })?;
    debug!("load_grayscale: {} ({}x{})", path.display(), width, height);
    luminance(pixels.view())
}

/// Decode `path` and extract its curve.
pub fn extract_path_from_file(path: &Path, config: &PathConfig) -> Result<Vec<Point>> {
    config.validate()?;
    let gray = load_grayscale(path)?;
    Ok(extract_path(gray.view(), config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_image_error() {
        let err = extract_path_from_file(
            Path::new("/nonexistent/pipe_new.png"),
            &PathConfig::default(),
        )
        .expect_err("missing file");
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn test_png_round_trip() {
        let mut img = image::GrayImage::from_pixel(24, 6, image::Luma([255u8]));
        for x in 2..22 {
            img.put_pixel(x, 3, image::Luma([0u8]));
        }
        let path = std::env::temp_dir().join(format!("pathpoints_io_{}.png", std::process::id()));
        img.save(&path).expect("write temp png");

        let points = extract_path_from_file(&path, &PathConfig::default()).expect("decodes");
        let _ = std::fs::remove_file(&path);

        assert_eq!(points, vec![Point::new(2.0, 3.0), Point::new(21.0, 3.0)]);
    }
}
