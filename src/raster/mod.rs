//! Raster stages: luminance, binarization, padding and thinning.
//!
//! All stages take `ndarray` views and return freshly allocated arrays;
//! inputs are never modified in place.
//!
//! | Stage | Input | Output |
//! |-------|-------|--------|
//! | [`luminance`] | (H, W, C) u8, C in 1..=4 | (H, W) u8 |
//! | [`binarize`] | (H, W) u8 | (H, W) bool, `true` where darker than threshold |
//! | [`pad_mask`] | (H, W) bool | (H + 2p, W + 2p) bool |
//! | [`skeletonize`] | (H, W) bool | (H, W) bool, one pixel wide |

pub mod padding;
pub mod thinning;
pub mod threshold;

pub use padding::pad_mask;
pub use thinning::skeletonize;
pub use threshold::{binarize, luminance};
