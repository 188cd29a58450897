//! Pixel adjacency graph over skeleton pixels.
//!
//! Nodes live in a dense arena indexed by [`NodeId`]; a coordinate map
//! translates `(x, y)` pixel positions to ids. Ids are assigned in row-major
//! scan order (y, then x), which also fixes the order in which leaves are
//! reported.
//!
//! Edges join 8-connected neighbors. Each adjacency list holds every neighbor
//! exactly once, so the edge set has no parallel edges or self-loops and
//! `degree` is the number of distinct neighbors.

use std::collections::HashMap;

use ndarray::ArrayView2;

pub type NodeId = usize;

/// 8-neighborhood offsets, clockwise from east.
const DX: [isize; 8] = [1, 1, 0, -1, -1, -1, 0, 1];
const DY: [isize; 8] = [0, 1, 1, 1, 0, -1, -1, -1];

/// Undirected graph of skeleton pixels.
#[derive(Debug, Clone, Default)]
pub struct PixelGraph {
    coords: Vec<(usize, usize)>,
    index: HashMap<(usize, usize), NodeId>,
    adjacency: Vec<Vec<NodeId>>,
}

impl PixelGraph {
    /// Build the graph from a skeleton mask (height, width).
    pub fn from_skeleton(skeleton: ArrayView2<bool>) -> Self {
        let (height, width) = skeleton.dim();

        let mut coords = Vec::new();
        let mut index = HashMap::new();
        for y in 0..height {
            for x in 0..width {
                if skeleton[[y, x]] {
                    index.insert((x, y), coords.len());
                    coords.push((x, y));
                }
            }
        }

        let adjacency = coords
            .iter()
            .map(|&(x, y)| {
                (0..8)
                    .filter_map(|dir| {
                        let nx = x as isize + DX[dir];
                        let ny = y as isize + DY[dir];
                        if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                            return None;
                        }
                        index.get(&(nx as usize, ny as usize)).copied()
                    })
                    .collect()
            })
            .collect();

        Self {
            coords,
            index,
            adjacency,
        }
    }

    pub fn node_count(&self) -> usize {
        self.coords.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Pixel coordinate `(x, y)` of a node.
    pub fn coord(&self, id: NodeId) -> (usize, usize) {
        self.coords[id]
    }

    pub fn node_at(&self, x: usize, y: usize) -> Option<NodeId> {
        self.index.get(&(x, y)).copied()
    }

    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id]
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency[id].len()
    }

    /// Nodes of degree exactly 1, in row-major order.
    pub fn leaves(&self) -> Vec<NodeId> {
        (0..self.node_count())
            .filter(|&id| self.degree(id) == 1)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_empty_skeleton() {
        let skeleton = Array2::from_elem((5, 5), false);
        let graph = PixelGraph::from_skeleton(skeleton.view());
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.leaves().is_empty());
    }

    #[test]
    fn test_horizontal_line_is_simple_path() {
        let mut skeleton = Array2::from_elem((3, 10), false);
        for x in 1..9 {
            skeleton[[1, x]] = true;
        }

        let graph = PixelGraph::from_skeleton(skeleton.view());
        assert_eq!(graph.node_count(), 8);
        assert_eq!(graph.edge_count(), 7);

        let leaves = graph.leaves();
        assert_eq!(leaves.len(), 2);
        assert_eq!(graph.coord(leaves[0]), (1, 1));
        assert_eq!(graph.coord(leaves[1]), (8, 1));
    }

    #[test]
    fn test_diagonal_neighbors_connect() {
        let skeleton = array![
            [true, false, false],
            [false, true, false],
            [false, false, true],
        ];
        let graph = PixelGraph::from_skeleton(skeleton.view());

        let center = graph.node_at(1, 1).expect("center pixel");
        assert_eq!(graph.degree(center), 2);
        assert_eq!(graph.leaves().len(), 2);
    }

    #[test]
    fn test_full_block_has_no_duplicate_edges() {
        let skeleton = Array2::from_elem((3, 3), true);
        let graph = PixelGraph::from_skeleton(skeleton.view());

        let center = graph.node_at(1, 1).expect("center pixel");
        assert_eq!(graph.degree(center), 8);
        // 12 axis-aligned + 8 diagonal pairs in a 3x3 block.
        assert_eq!(graph.edge_count(), 20);
        for id in 0..graph.node_count() {
            assert!(!graph.neighbors(id).contains(&id));
        }
    }

    #[test]
    fn test_ids_follow_row_major_order() {
        let skeleton = array![[false, true], [true, false]];
        let graph = PixelGraph::from_skeleton(skeleton.view());
        assert_eq!(graph.coord(0), (1, 0));
        assert_eq!(graph.coord(1), (0, 1));
    }

    #[test]
    fn test_isolated_pixel_has_degree_zero() {
        let skeleton = array![[false, false, false], [false, true, false], [false, false, false]];
        let graph = PixelGraph::from_skeleton(skeleton.view());
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.degree(0), 0);
        assert!(graph.leaves().is_empty());
    }
}
