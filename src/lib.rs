//! PathPoints Rust Extensions
//!
//! Extracts the centerline of a single thin curve (for example a traced pipe
//! silhouette) from a raster image as an ordered list of floating-point
//! points, with Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Pipeline
//! 1. **Binarize** - pixels darker than a threshold become foreground
//! 2. **Pad** - add a background margin so thinning never touches the edge
//! 3. **Skeletonize** - Guo-Hall thinning to a one-pixel-wide skeleton
//! 4. **Graph** - 8-connected adjacency between skeleton pixels
//! 5. **Longest leaf path** - the longest shortest path between endpoints
//! 6. **Unpad** - shift coordinates back to the source image
//! 7. **Simplify** - drop near-collinear and tightly spaced vertices
//!
//! ## Image Format
//! - **Grayscale**: (height, width) u8
//! - **Multi-channel**: (height, width, C) u8 with C = 1, 2, 3 or 4; reduced
//!   to luminance with ITU-R 601-2 weights, alpha ignored
//!
//! An empty point list means no usable curve was found.

pub mod config;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod raster;
pub mod trace;

#[cfg(feature = "image")]
pub mod io;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{load_config, PathConfig};
pub use error::{Error, Result};
pub use format::format_path_points;
pub use pipeline::{
    extract_path, extract_path_detailed, extract_path_from_buffer, extract_path_from_mask,
    extract_paths_batch, simplify_points, unpad, PathExtraction,
};
pub use trace::Point;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::config::PathConfig;
    use crate::format::format_path_points as format_points;
    use crate::pipeline::{extract_path, simplify_points};
    use crate::raster::{luminance, skeletonize};
    use crate::trace::Point;

    fn to_tuples(points: Vec<Point>) -> Vec<(f64, f64)> {
        points.into_iter().map(Into::into).collect()
    }

    fn build_config(
        threshold: u8,
        pad: usize,
        simplify: bool,
        angle_threshold: f64,
        min_spacing: f64,
    ) -> PyResult<PathConfig> {
        let config = PathConfig {
            threshold,
            pad,
            simplify,
            angle_threshold_degrees: angle_threshold,
            min_spacing,
        };
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(config)
    }

    // ========================================================================
    // Extraction
    // ========================================================================

    /// Extract the curve from a 2-D grayscale u8 image.
    ///
    /// Returns a list of (x, y) tuples; empty when no curve was found.
    ///
    /// # Arguments
    /// * `image` - Grayscale image (height, width)
    /// * `threshold` - Pixels darker than this are foreground (default: 50)
    /// * `pad` - Border margin used during thinning (default: 2)
    /// * `simplify` - Run the angle/spacing simplifier (default: True)
    /// * `angle_threshold` - Straightness tolerance in degrees (default: 35)
    /// * `min_spacing` - Minimum vertex spacing (default: 2.0)
    #[pyfunction]
    #[pyo3(signature = (image, threshold=50, pad=2, simplify=true, angle_threshold=35.0, min_spacing=2.0))]
    pub fn extract_path_points<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
        threshold: u8,
        pad: usize,
        simplify: bool,
        angle_threshold: f64,
        min_spacing: f64,
    ) -> PyResult<Vec<(f64, f64)>> {
        let config = build_config(threshold, pad, simplify, angle_threshold, min_spacing)?;
        let gray = image.as_array().to_owned();
        let points = py.allow_threads(move || extract_path(gray.view(), &config));
        Ok(to_tuples(points))
    }

    /// Extract the curve from a (height, width, channels) u8 image.
    ///
    /// Channels 1-4 are accepted; color is reduced to luminance, alpha ignored.
    #[pyfunction]
    #[pyo3(signature = (image, threshold=50, pad=2, simplify=true, angle_threshold=35.0, min_spacing=2.0))]
    pub fn extract_path_points_rgb<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threshold: u8,
        pad: usize,
        simplify: bool,
        angle_threshold: f64,
        min_spacing: f64,
    ) -> PyResult<Vec<(f64, f64)>> {
        let config = build_config(threshold, pad, simplify, angle_threshold, min_spacing)?;
        let gray = luminance(image.as_array()).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let points = py.allow_threads(move || extract_path(gray.view(), &config));
        Ok(to_tuples(points))
    }

    // ========================================================================
    // Stage Utilities
    // ========================================================================

    /// Simplify a list of (x, y) points with the angle/spacing rule.
    #[pyfunction]
    #[pyo3(signature = (points, angle_threshold=35.0, min_spacing=2.0))]
    pub fn simplify_path_points(
        points: Vec<(f64, f64)>,
        angle_threshold: f64,
        min_spacing: f64,
    ) -> PyResult<Vec<(f64, f64)>> {
        let points: Vec<Point> = points.into_iter().map(Point::from).collect();
        let simplified = simplify_points(&points, angle_threshold, min_spacing)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(to_tuples(simplified))
    }

    /// Thin a boolean mask to a one-pixel-wide skeleton.
    #[pyfunction]
    pub fn skeletonize_mask<'py>(
        py: Python<'py>,
        mask: PyReadonlyArray2<'py, bool>,
    ) -> Bound<'py, PyArray2<bool>> {
        let input = mask.as_array().to_owned();
        let result = py.allow_threads(move || skeletonize(input.view()));
        result.into_pyarray(py)
    }

    /// Render (x, y) points as "x y,x y,...".
    #[pyfunction]
    pub fn format_path_points(points: Vec<(f64, f64)>) -> String {
        let points: Vec<Point> = points.into_iter().map(Point::from).collect();
        format_points(&points)
    }

    /// PathPoints Rust extension module
    #[pymodule]
    pub fn pathpoints_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Extraction
        m.add_function(wrap_pyfunction!(extract_path_points, m)?)?;
        m.add_function(wrap_pyfunction!(extract_path_points_rgb, m)?)?;

        // Stage utilities
        m.add_function(wrap_pyfunction!(simplify_path_points, m)?)?;
        m.add_function(wrap_pyfunction!(skeletonize_mask, m)?)?;
        m.add_function(wrap_pyfunction!(format_path_points, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pathpoints_rust;
