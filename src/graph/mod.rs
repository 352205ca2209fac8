//! Weighted graphs and minimum spanning trees.
//!
//! - [`Graph`]: validated edge list, with a complete-graph builder
//! - [`UnionFind`]: disjoint sets with path compression and union by rank
//! - [`kruskal_mst`]: Kruskal's algorithm (1956), O(E log E)

mod kruskal;
mod union_find;

pub use kruskal::{kruskal_mst, total_weight};
pub use union_find::UnionFind;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{OptimizeError, Result};

/// An undirected edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    /// One endpoint.
    pub source: usize,
    /// The other endpoint.
    pub target: usize,
    /// Non-negative edge length.
    pub weight: f64,
}

impl WeightedEdge {
    /// Creates an edge.
    pub fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

/// A vertex count plus an edge list whose endpoints are all in range.
///
/// # Examples
///
/// ```
/// use u_dispatch::graph::{Graph, WeightedEdge};
///
/// let g = Graph::new(3, vec![WeightedEdge::new(0, 1, 1.0), WeightedEdge::new(1, 2, 2.0)]).unwrap();
/// assert_eq!(g.vertex_count(), 3);
/// assert!(Graph::new(2, vec![WeightedEdge::new(0, 5, 1.0)]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<WeightedEdge>,
}

impl Graph {
    /// Creates a graph, rejecting out-of-range endpoints and negative or
    /// non-finite weights.
    pub fn new(vertex_count: usize, edges: Vec<WeightedEdge>) -> Result<Self> {
        let graph = Self {
            vertex_count,
            edges,
        };
        graph.validate()?;
        Ok(graph)
    }

    /// Checks endpoint ranges and edge weights.
    pub fn validate(&self) -> Result<()> {
        let n = self.vertex_count;
        for (k, e) in self.edges.iter().enumerate() {
            if e.source >= n || e.target >= n {
                return Err(OptimizeError::invalid(format!(
                    "edge {k} ({}, {}) references a vertex outside 0..{n}",
                    e.source, e.target
                )));
            }
            if !e.weight.is_finite() || e.weight < 0.0 {
                return Err(OptimizeError::invalid(format!(
                    "edge {k} has invalid weight {}",
                    e.weight
                )));
            }
        }
        Ok(())
    }

    /// Builds the complete graph over a distance matrix.
    ///
    /// Edges are emitted for every pair `i < j` in row order, so equal
    /// weights keep a deterministic relative order.
    pub fn complete(distances: &DistanceMatrix) -> Self {
        let n = distances.size();
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push(WeightedEdge::new(i, j, distances.get(i, j)));
            }
        }
        Self {
            vertex_count: n,
            edges,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Edge list in insertion order.
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Adjacency lists built from `edges`, in edge order.
    pub fn adjacency(vertex_count: usize, edges: &[WeightedEdge]) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); vertex_count];
        for e in edges {
            adj[e.source].push(e.target);
            adj[e.target].push(e.source);
        }
        adj
    }
}
