//! Textual rendering of a point list.
//!
//! Points are written as `"x y"` pairs separated by commas, e.g.
//! `"1.0 2.0,3.5 4.25,10.0 4.0"`. Integral coordinates keep one decimal.

use crate::trace::Point;

fn format_coord(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

/// Render points as comma-separated `"x y"` pairs. Empty input gives `""`.
pub fn format_path_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{} {}", format_coord(p.x), format_coord(p.y)))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mixed_values() {
        let points = vec![
            Point::new(1.0, 2.0),
            Point::new(3.5, 4.25),
            Point::new(10.0, 4.0),
        ];
        assert_eq!(format_path_points(&points), "1.0 2.0,3.5 4.25,10.0 4.0");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_path_points(&[]), "");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_path_points(&[Point::new(-2.0, 0.5)]), "-2.0 0.5");
    }
}
