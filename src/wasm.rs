//! WebAssembly exports for curve extraction.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! ## Point Layout
//!
//! Point lists cross the boundary as flat `Float64Array`s:
//! `[x0, y0, x1, y1, ...]`. An empty array means no curve was found.

use wasm_bindgen::prelude::*;

use crate::config::PathConfig;
use crate::error::Error;
use crate::format::format_path_points;
use crate::pipeline::{extract_path_from_buffer, simplify_points};
use crate::trace::{points_from_flat, points_to_flat};

fn to_js(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ============================================================================
// Extraction
// ============================================================================

/// Extract the curve from an image buffer.
///
/// # Arguments
/// * `data` - Flat row-major pixel bytes (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - 1 (gray), 2 (gray + alpha), 3 (RGB) or 4 (RGBA)
/// * `threshold` - Pixels darker than this are foreground (default 50)
/// * `pad` - Border margin used during thinning (default 2)
/// * `simplify` - Run the angle/spacing simplifier (default true)
/// * `angle_threshold` - Straightness tolerance in degrees (default 35)
/// * `min_spacing` - Minimum vertex spacing (default 2.0)
///
/// # Returns
/// Flat `[x0, y0, x1, y1, ...]` array, or an error string for bad input
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn extract_path_points_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    threshold: u8,
    pad: usize,
    simplify: bool,
    angle_threshold: f64,
    min_spacing: f64,
) -> Result<Vec<f64>, JsValue> {
    let config = PathConfig {
        threshold,
        pad,
        simplify,
        angle_threshold_degrees: angle_threshold,
        min_spacing,
    };

    extract_path_from_buffer(data, width, height, channels, &config)
        .map(|points| points_to_flat(&points))
        .map_err(to_js)
}

// ============================================================================
// Point Utilities
// ============================================================================

/// Simplify a flat point list with the angle/spacing rule.
///
/// Fails on an odd-length list or out-of-range parameters.
#[wasm_bindgen]
pub fn simplify_path_points_wasm(
    points: &[f64],
    angle_threshold: f64,
    min_spacing: f64,
) -> Result<Vec<f64>, JsValue> {
    let points = points_from_flat(points).map_err(to_js)?;
    let simplified = simplify_points(&points, angle_threshold, min_spacing).map_err(to_js)?;
    Ok(points_to_flat(&simplified))
}

/// Render a flat point list as `"x y,x y,..."`.
#[wasm_bindgen]
pub fn format_path_points_wasm(points: &[f64]) -> Result<String, JsValue> {
    let points = points_from_flat(points).map_err(to_js)?;
    Ok(format_path_points(&points))
}
