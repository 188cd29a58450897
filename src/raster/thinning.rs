//! Topology-preserving thinning (Guo-Hall).
//!
//! Each pass runs two subiterations. A subiteration first marks every
//! removable pixel against a frozen copy of the mask, then deletes the marks.
//! Marking is parallelized across rows with Rayon; because it only reads the
//! frozen state, the result is independent of scheduling.
//!
//! Neighbors are numbered counter-clockwise from east:
//!
//! ```text
//! x4 x3 x2
//! x5 P  x1
//! x6 x7 x8
//! ```
//!
//! P is removable when
//! - `C(P) == 1`, C = number of `i` in 1..=4 with `!x(2i-1) && (x(2i) || x(2i+1))`
//!   (x9 = x1)
//! - `2 <= min(N1, N2) <= 3`, N1 = sum of `x(2k-1) || x(2k)`,
//!   N2 = sum of `x(2k) || x(2k+1)` for k in 1..=4
//! - subiteration 1: `(x2 || x3 || !x8) && x1` is false
//! - subiteration 2: `(x6 || x7 || !x4) && x5` is false
//!
//! The N1/N2 test keeps line endpoints: two-pixel-thick diagonals thin to a
//! line and a 2x2 block to a single pixel.
//!
//! Pixels outside the mask read as background.

use log::debug;
use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Subiteration {
    First,
    Second,
}

/// Reduce a binary mask to a one-pixel-wide skeleton.
///
/// # Arguments
/// * `mask` - Foreground mask (height, width); should carry a background margin
///
/// # Returns
/// Skeleton mask of the same shape. An empty mask yields an empty skeleton.
pub fn skeletonize(mask: ArrayView2<bool>) -> Array2<bool> {
    let (height, width) = mask.dim();
    if width == 0 || height == 0 {
        return Array2::from_elem((height, width), false);
    }

    let mut img: Vec<bool> = mask.iter().copied().collect();
    let mut marks = vec![false; width * height];
    let initial = img.iter().filter(|&&v| v).count();

    let mut passes = 0usize;
    loop {
        let mut changed = false;

        for step in [Subiteration::First, Subiteration::Second] {
            let frozen = &img;
            marks
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, mark) in row.iter_mut().enumerate() {
                        *mark = frozen[y * width + x]
                            && is_removable(&neighbors(frozen, width, height, x, y), step);
                    }
                });

            for (pixel, &mark) in img.iter_mut().zip(marks.iter()) {
                if mark {
                    *pixel = false;
                    changed = true;
                }
            }
        }

        passes += 1;
        if !changed {
            break;
        }
    }

    let remaining = img.iter().filter(|&&v| v).count();
    debug!(
        "skeletonize: {}x{} mask, {} passes, {} -> {} pixels",
        width, height, passes, initial, remaining
    );

    Array2::from_shape_fn((height, width), |(y, x)| img[y * width + x])
}

/// Neighbors x1..x8, counter-clockwise from east.
#[inline]
fn neighbors(img: &[bool], width: usize, height: usize, x: usize, y: usize) -> [bool; 8] {
    let at = |dx: isize, dy: isize| -> bool {
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
            false
        } else {
            img[ny as usize * width + nx as usize]
        }
    };

    [
        at(1, 0),
        at(1, -1),
        at(0, -1),
        at(-1, -1),
        at(-1, 0),
        at(-1, 1),
        at(0, 1),
        at(1, 1),
    ]
}

#[inline]
fn is_removable(n: &[bool; 8], step: Subiteration) -> bool {
    // n[i] is x(i+1)
    let x = |i: usize| n[(i - 1) % 8];

    let crossings = (1..=4)
        .filter(|&i| !x(2 * i - 1) && (x(2 * i) || x(2 * i + 1)))
        .count();
    if crossings != 1 {
        return false;
    }

    let n1 = (1..=4).filter(|&k| x(2 * k - 1) || x(2 * k)).count();
    let n2 = (1..=4).filter(|&k| x(2 * k) || x(2 * k + 1)).count();
    if !(2..=3).contains(&n1.min(n2)) {
        return false;
    }

    match step {
        Subiteration::First => !((x(2) || x(3) || !x(8)) && x(1)),
        Subiteration::Second => !((x(6) || x(7) || !x(4)) && x(5)),
    }
}
