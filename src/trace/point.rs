use crate::error::{Error, Result};

/// A 2D point in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert an integer pixel coordinate `(x, y)`.
    pub fn from_pixel((x, y): (usize, usize)) -> Self {
        Self::new(x as f64, y as f64)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Shift both coordinates by `-offset`.
    pub fn offset_by(&self, offset: f64) -> Point {
        Point::new(self.x - offset, self.y - offset)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Split a flat `[x0, y0, x1, y1, ...]` list into points.
pub fn points_from_flat(flat: &[f64]) -> Result<Vec<Point>> {
    if flat.len() % 2 != 0 {
        return Err(Error::OddCoordinateCount(flat.len()));
    }
    Ok(flat
        .chunks_exact(2)
        .map(|c| Point::new(c[0], c[1]))
        .collect())
}

/// Inverse of [`points_from_flat`].
pub fn points_to_flat(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}
