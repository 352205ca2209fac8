//! Kruskal's minimum spanning tree.
//!
//! # Algorithm
//!
//! 1. Stable-sort edges by ascending weight (equal weights keep input order).
//! 2. Scan the sorted edges, accepting each edge whose endpoints lie in
//!    different components of a [`UnionFind`], and merging those components.
//! 3. Stop once `V - 1` edges are accepted.
//!
//! # Complexity
//!
//! O(E log E) for the sort, near-linear for the scan.
//!
//! # Reference
//!
//! Kruskal, J.B. (1956). "On the shortest spanning subtree of a graph and the
//! traveling salesman problem", *Proc. AMS* 7(1), 48-50.

use tracing::debug;

use super::{Graph, UnionFind, WeightedEdge};

/// Computes a minimum spanning forest of `graph`.
///
/// For a connected graph the result has exactly `V - 1` edges, in the order
/// they were accepted.
///
/// # Examples
///
/// ```
/// use u_dispatch::graph::{kruskal_mst, total_weight, Graph, WeightedEdge};
///
/// let g = Graph::new(3, vec![
///     WeightedEdge::new(0, 1, 1.0),
///     WeightedEdge::new(1, 2, 2.0),
///     WeightedEdge::new(0, 2, 5.0),
/// ]).unwrap();
/// let mst = kruskal_mst(&g);
/// assert_eq!(mst.len(), 2);
/// assert!((total_weight(&mst) - 3.0).abs() < 1e-10);
/// ```
pub fn kruskal_mst(graph: &Graph) -> Vec<WeightedEdge> {
    let n = graph.vertex_count();
    let target = n.saturating_sub(1);
    let mut mst = Vec::with_capacity(target);
    if target == 0 {
        return mst;
    }

    let mut sorted: Vec<&WeightedEdge> = graph.edges().iter().collect();
    // slice::sort_by is stable
    sorted.sort_by(|a, b| sort_key(a.weight).total_cmp(&sort_key(b.weight)));

    let mut sets = UnionFind::new(n);
    for edge in sorted {
        if sets.union(edge.source, edge.target) {
            mst.push(*edge);
            if mst.len() == target {
                break;
            }
        }
    }

    debug!(
        vertices = n,
        edges = graph.edges().len(),
        accepted = mst.len(),
        "kruskal spanning tree built"
    );
    mst
}

/// `-0.0` and `0.0` compare equal so that they tie in input order.
fn sort_key(weight: f64) -> f64 {
    if weight == 0.0 {
        0.0
    } else {
        weight
    }
}

/// Sum of edge weights.
pub fn total_weight(edges: &[WeightedEdge]) -> f64 {
    edges.iter().map(|e| e.weight).sum()
}
