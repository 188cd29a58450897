//! Background margin around a mask.
//!
//! Thinning misbehaves where foreground touches the image edge, so masks are
//! enlarged by `pad` background cells on every side before skeletonization.
//! Coordinates traced on the padded mask must be shifted back by `pad`.

use ndarray::{s, Array2, ArrayView2};

use crate::error::{Error, Result};

/// Return a new (h + 2p, w + 2p) mask with `mask` centered and a background border.
///
/// Fails with [`Error::InvalidConfig`] when the padded shape does not fit in
/// `usize` or `isize::MAX` cells.
pub fn pad_mask(mask: ArrayView2<bool>, pad: usize) -> Result<Array2<bool>> {
    let (height, width) = mask.dim();
    let (padded_h, padded_w) = padded_dim(height, width, pad).ok_or_else(|| {
        Error::InvalidConfig(format!("pad {pad} is too large for a {width}x{height} mask"))
    })?;

    let mut out = Array2::from_elem((padded_h, padded_w), false);
    out.slice_mut(s![pad..pad + height, pad..pad + width])
        .assign(&mask);
    Ok(out)
}

fn padded_dim(height: usize, width: usize, pad: usize) -> Option<(usize, usize)> {
    let border = pad.checked_mul(2)?;
    let h = height.checked_add(border)?;
    let w = width.checked_add(border)?;
    let cells = h.checked_mul(w)?;
    (cells <= isize::MAX as usize).then_some((h, w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_pad_dimensions_and_border() {
        let mask = Array2::from_elem((3, 4), true);
        let padded = pad_mask(mask.view(), 2).expect("small pad");

        assert_eq!(padded.dim(), (7, 8));
        for ((y, x), &v) in padded.indexed_iter() {
            let inside = (2..5).contains(&y) && (2..6).contains(&x);
            assert_eq!(v, inside, "cell ({x}, {y})");
        }
    }

    #[test]
    fn test_pad_zero_is_copy() {
        let mask = array![[true, false], [false, true]];
        assert_eq!(pad_mask(mask.view(), 0).expect("zero pad"), mask);
    }

    #[test]
    fn test_pad_empty_mask() {
        let mask = Array2::<bool>::from_elem((0, 0), false);
        let padded = pad_mask(mask.view(), 1).expect("small pad");
        assert_eq!(padded.dim(), (2, 2));
        assert!(padded.iter().all(|&v| !v));
    }

    #[test]
    fn test_pad_overflow_rejected() {
        let mask = Array2::from_elem((3, 3), true);
        for pad in [usize::MAX, usize::MAX / 2, usize::MAX / 4] {
            let err = pad_mask(mask.view(), pad).expect_err("overflowing pad");
            assert!(matches!(err, Error::InvalidConfig(_)), "pad {pad}");
        }
    }
}
