//! Path tracing over a skeleton.
//!
//! - **Graph**: 8-connected pixel adjacency with a coordinate-indexed node arena
//! - **Longest path**: longest shortest path between two degree-1 pixels
//! - **Simplify**: angle/spacing vertex reduction

pub mod graph;
pub mod longest_path;
pub mod point;
pub mod simplify;

pub use graph::{NodeId, PixelGraph};
pub use longest_path::{extract_raw_path, longest_leaf_path, shortest_path};
pub use point::{points_from_flat, points_to_flat, Point};
pub use simplify::{simplify_path, turning_angle};
