//! End-to-end curve extraction.
//!
//! ```text
//! gray -> binarize -> pad -> skeletonize -> graph -> longest leaf path
//!      -> unpad -> simplify -> points
//! ```
//!
//! Every call is a pure function of its inputs. An empty result means no
//! usable curve was found (empty mask, fewer than two skeleton endpoints, or
//! no connected endpoint pair); it is not an error.

use log::{debug, warn};
use ndarray::{ArrayView2, ArrayView3};
use rayon::prelude::*;

use crate::config::PathConfig;
use crate::error::{Error, Result};
use crate::raster::{binarize, luminance, pad_mask, skeletonize};
use crate::trace::{extract_raw_path, simplify_path, PixelGraph, Point};

/// Extraction result with per-stage diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathExtraction {
    /// Final points (simplified when enabled), in source image coordinates
    pub points: Vec<Point>,
    /// Unpadded path before simplification, one point per skeleton pixel
    pub raw_points: Vec<Point>,
    /// Foreground pixels remaining after thinning, counted on the mask.
    /// Every skeleton pixel becomes a graph node, so this equals `node_count`.
    pub skeleton_pixels: usize,
    pub node_count: usize,
    pub edge_count: usize,
    /// Skeleton pixels with exactly one neighbor
    pub leaf_count: usize,
}

/// Extract the curve from a grayscale image (dark curve on light background).
///
/// `config` is expected to pass [`PathConfig::validate`]; a padding too large
/// to allocate yields an empty result.
pub fn extract_path(gray: ArrayView2<u8>, config: &PathConfig) -> Vec<Point> {
    extract_path_detailed(gray, config).points
}

/// Extract the curve from a grayscale image and report stage statistics.
pub fn extract_path_detailed(gray: ArrayView2<u8>, config: &PathConfig) -> PathExtraction {
    let mask = binarize(gray, config.threshold);
    extract_from_mask(mask.view(), config)
}

/// Extract the curve from an already binarized mask (`true` = curve).
pub fn extract_path_from_mask(mask: ArrayView2<bool>, config: &PathConfig) -> Vec<Point> {
    extract_from_mask(mask, config).points
}

/// Extract the curve from a flat row-major buffer with 1 to 4 channels.
///
/// # Arguments
/// * `data` - Pixel bytes, length `width * height * channels`
/// * `channels` - 1 (gray), 2 (gray + alpha), 3 (RGB) or 4 (RGBA)
///
/// # Returns
/// Points, or an error for malformed buffers and invalid configuration
pub fn extract_path_from_buffer(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    config: &PathConfig,
) -> Result<Vec<Point>> {
    config.validate()?;
    if !(1..=4).contains(&channels) {
        return Err(Error::UnsupportedChannels(channels));
    }

    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .unwrap_or(usize::MAX);
    if data.len() != expected {
        return Err(Error::SizeMismatch {
            expected,
            actual: data.len(),
        });
    }

    let input = ArrayView3::from_shape((height, width, channels), data).map_err(|_| {
        Error::SizeMismatch {
            expected,
            actual: data.len(),
        }
    })?;
    let gray = luminance(input)?;
    Ok(extract_path(gray.view(), config))
}

/// Run independent extractions in parallel. Output order matches input order.
pub fn extract_paths_batch(images: &[ArrayView2<u8>], config: &PathConfig) -> Vec<Vec<Point>> {
    images
        .par_iter()
        .map(|image| extract_path(image.view(), config))
        .collect()
}

/// Simplify a caller-supplied point list after validating the parameters.
pub fn simplify_points(
    points: &[Point],
    angle_threshold: f64,
    min_spacing: f64,
) -> Result<Vec<Point>> {
    PathConfig {
        angle_threshold_degrees: angle_threshold,
        min_spacing,
        ..PathConfig::default()
    }
    .validate()?;
    Ok(simplify_path(points, angle_threshold, min_spacing))
}

/// Shift points from padded-mask coordinates back to source coordinates.
pub fn unpad(points: &[Point], pad: usize) -> Vec<Point> {
    let offset = pad as f64;
    points.iter().map(|p| p.offset_by(offset)).collect()
}

fn extract_from_mask(mask: ArrayView2<bool>, config: &PathConfig) -> PathExtraction {
    let (height, width) = mask.dim();
    if width == 0 || height == 0 {
        debug!("extract: zero-area input {}x{}", width, height);
        return PathExtraction::default();
    }

    let padded = match pad_mask(mask, config.pad) {
        Ok(padded) => padded,
        Err(e) => {
            warn!("extract: {e}");
            return PathExtraction::default();
        }
    };
    let skeleton = skeletonize(padded.view());
    let skeleton_pixels = skeleton.iter().filter(|&&v| v).count();
    let graph = PixelGraph::from_skeleton(skeleton.view());
    let leaf_count = graph.leaves().len();
    debug!(
        "extract: {}x{} mask, pad {}, skeleton {} nodes / {} edges / {} leaves",
        width,
        height,
        config.pad,
        graph.node_count(),
        graph.edge_count(),
        leaf_count
    );

    let raw_points = unpad(&extract_raw_path(&graph), config.pad);
    let points = if config.simplify {
        simplify_keeping_ends(&raw_points, config)
    } else {
        raw_points.clone()
    };
    debug!(
        "extract: raw path {} points, output {} points",
        raw_points.len(),
        points.len()
    );

    PathExtraction {
        points,
        raw_points,
        skeleton_pixels,
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        leaf_count,
    }
}

/// Simplify, but never collapse a path to a single point.
fn simplify_keeping_ends(points: &[Point], config: &PathConfig) -> Vec<Point> {
    let mut simplified = simplify_path(
        points,
        config.angle_threshold_degrees,
        config.min_spacing,
    );
    if simplified.len() == 1 && points.len() >= 2 {
        simplified.push(points[points.len() - 1]);
    }
    simplified
}
