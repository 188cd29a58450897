//! Representative path selection: the longest shortest path between leaves.
//!
//! Every unordered leaf pair `(i, j)`, `i < j` in row-major leaf order, is
//! scored by the node count of its unweighted shortest path. The first pair
//! with the maximal count wins; disconnected pairs are skipped.
//!
//! Instead of one search per pair, a single breadth-first search runs from
//! each leaf and yields distances to all later leaves. Searches run in
//! parallel; their per-leaf winners are reduced in leaf order, which gives the
//! same pair as a sequential scan.

use std::collections::VecDeque;

use log::{debug, warn};
use rayon::prelude::*;

use super::graph::{NodeId, PixelGraph};
use super::point::Point;

/// Above this many leaves the pair search gets noticeably slow.
const LEAF_WARN_LIMIT: usize = 64;

const UNVISITED: usize = usize::MAX;

/// Breadth-first search tree rooted at one node.
struct Bfs {
    source: NodeId,
    dist: Vec<usize>,
    parent: Vec<NodeId>,
}

impl Bfs {
    /// Neighbors are visited in adjacency order; first discovery sets the parent.
    fn run(graph: &PixelGraph, source: NodeId) -> Self {
        let n = graph.node_count();
        let mut dist = vec![UNVISITED; n];
        let mut parent = vec![UNVISITED; n];
        let mut queue = VecDeque::new();

        dist[source] = 0;
        queue.push_back(source);
        while let Some(node) = queue.pop_front() {
            for &next in graph.neighbors(node) {
                if dist[next] == UNVISITED {
                    dist[next] = dist[node] + 1;
                    parent[next] = node;
                    queue.push_back(next);
                }
            }
        }

        Self {
            source,
            dist,
            parent,
        }
    }

    fn distance(&self, target: NodeId) -> Option<usize> {
        (self.dist[target] != UNVISITED).then_some(self.dist[target])
    }

    /// Node sequence from the root to `target`, both included.
    fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut node = target;
        while node != self.source {
            node = self.parent[node];
            path.push(node);
        }
        path.reverse();
        Some(path)
    }
}

/// Unweighted shortest path between two nodes, or `None` if disconnected.
pub fn shortest_path(graph: &PixelGraph, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
    Bfs::run(graph, from).path_to(to)
}

/// Longest shortest path between any two leaves.
///
/// # Returns
/// Node ids from the earlier leaf to the later one, or `None` when the graph
/// is empty, has fewer than two leaves, or no leaf pair is connected.
pub fn longest_leaf_path(graph: &PixelGraph) -> Option<Vec<NodeId>> {
    if graph.is_empty() {
        return None;
    }

    let leaves = graph.leaves();
    if leaves.len() < 2 {
        debug!("longest_leaf_path: {} leaves, nothing to connect", leaves.len());
        return None;
    }
    if leaves.len() > LEAF_WARN_LIMIT {
        warn!(
            "longest_leaf_path: {} leaves; pair search is quadratic, consider a stricter threshold",
            leaves.len()
        );
    }

    // Per source leaf: first later leaf at maximal distance.
    let per_leaf: Vec<Option<(usize, usize)>> = (0..leaves.len())
        .into_par_iter()
        .map(|i| {
            let bfs = Bfs::run(graph, leaves[i]);
            let mut best: Option<(usize, usize)> = None;
            for (j, &leaf) in leaves.iter().enumerate().skip(i + 1) {
                if let Some(d) = bfs.distance(leaf) {
                    if best.map_or(true, |(_, best_d)| d > best_d) {
                        best = Some((j, d));
                    }
                }
            }
            best
        })
        .collect();

    let mut winner: Option<(usize, usize, usize)> = None;
    for (i, candidate) in per_leaf.into_iter().enumerate() {
        if let Some((j, d)) = candidate {
            if winner.map_or(true, |(_, _, best_d)| d > best_d) {
                winner = Some((i, j, d));
            }
        }
    }

    let (i, j, d) = winner?;
    debug!(
        "longest_leaf_path: {} leaves, endpoints {:?} -> {:?}, {} nodes",
        leaves.len(),
        graph.coord(leaves[i]),
        graph.coord(leaves[j]),
        d + 1
    );
    shortest_path(graph, leaves[i], leaves[j])
}

/// Trace the representative path and convert it to float pixel coordinates.
///
/// Returns an empty sequence when no path can be extracted.
pub fn extract_raw_path(graph: &PixelGraph) -> Vec<Point> {
    longest_leaf_path(graph)
        .map(|path| {
            path.into_iter()
                .map(|id| Point::from_pixel(graph.coord(id)))
                .collect()
        })
        .unwrap_or_default()
}
