//! Grayscale conversion and binarization.
//!
//! ## Luminance
//!
//! Multi-channel buffers are reduced to 8-bit luminance with the ITU-R 601-2
//! weights used by common image loaders:
//!
//! `L = (R * 299 + G * 587 + B * 114) / 1000`
//!
//! Alpha is ignored. Two-channel buffers are treated as gray + alpha.

use ndarray::{Array2, ArrayView2, ArrayView3};

use crate::error::{Error, Result};

/// ITU-R 601-2 luma weights, scaled by 1000.
const LUMA_R: u32 = 299;
const LUMA_G: u32 = 587;
const LUMA_B: u32 = 114;

/// Reduce a (height, width, channels) u8 buffer to a single luminance plane.
///
/// # Arguments
/// * `input` - Image with 1, 2, 3, or 4 channels
///
/// # Returns
/// (height, width) luminance plane, or `UnsupportedChannels` for other shapes
pub fn luminance(input: ArrayView3<u8>) -> Result<Array2<u8>> {
    let (height, width, channels) = input.dim();

    match channels {
        1 | 2 => Ok(Array2::from_shape_fn((height, width), |(y, x)| input[[y, x, 0]])),
        3 | 4 => Ok(Array2::from_shape_fn((height, width), |(y, x)| {
            let r = input[[y, x, 0]] as u32;
            let g = input[[y, x, 1]] as u32;
            let b = input[[y, x, 2]] as u32;
            ((r * LUMA_R + g * LUMA_G + b * LUMA_B + 500) / 1000) as u8
        })),
        other => Err(Error::UnsupportedChannels(other)),
    }
}

/// Threshold a grayscale image into a foreground mask.
///
/// A pixel is foreground when its intensity is strictly below `threshold`,
/// so dark strokes on a light background come out as `true`.
pub fn binarize(gray: ArrayView2<u8>, threshold: u8) -> Array2<bool> {
    gray.mapv(|v| v < threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array3};

    #[test]
    fn test_binarize_strictly_below() {
        let gray = array![[0u8, 49, 50], [51, 255, 10]];
        let mask = binarize(gray.view(), 50);
        assert_eq!(mask, array![[true, true, false], [false, false, true]]);
    }

    #[test]
    fn test_binarize_all_background() {
        let gray = Array2::<u8>::from_elem((4, 6), 255);
        let mask = binarize(gray.view(), 50);
        assert!(mask.iter().all(|&v| !v));
    }

    #[test]
    fn test_luminance_rgb_weights() {
        let mut img = Array3::<u8>::zeros((1, 3, 3));
        img[[0, 0, 0]] = 255; // red
        img[[0, 1, 1]] = 255; // green
        img[[0, 2, 2]] = 255; // blue

        let lum = luminance(img.view()).expect("3 channels");
        assert_eq!(lum[[0, 0]], 76);
        assert_eq!(lum[[0, 1]], 150);
        assert_eq!(lum[[0, 2]], 29);
    }

    #[test]
    fn test_luminance_ignores_alpha() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 200;
        img[[0, 0, 1]] = 200;
        img[[0, 0, 2]] = 200;
        img[[0, 0, 3]] = 0;

        let lum = luminance(img.view()).expect("4 channels");
        assert_eq!(lum[[0, 0]], 200);
    }

    #[test]
    fn test_luminance_gray_alpha_uses_first_channel() {
        let mut img = Array3::<u8>::zeros((2, 2, 2));
        img[[1, 0, 0]] = 42;
        img[[1, 0, 1]] = 255;

        let lum = luminance(img.view()).expect("2 channels");
        assert_eq!(lum[[1, 0]], 42);
        assert_eq!(lum[[0, 0]], 0);
    }

    #[test]
    fn test_luminance_rejects_five_channels() {
        let img = Array3::<u8>::zeros((2, 2, 5));
        assert!(matches!(luminance(img.view()), Err(Error::UnsupportedChannels(5))));
    }
}
