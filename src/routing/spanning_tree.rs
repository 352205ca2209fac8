//! Greedy route from a minimum spanning tree.
//!
//! # Algorithm
//!
//! Build the complete Euclidean graph, take its Kruskal MST, then walk the
//! tree depth-first from the depot, appending each vertex the first time it
//! is reached. Closing the walk at the depot gives a tour whose length is at
//! most twice the MST weight (the classic 2-approximation for metric TSP).
//!
//! # Complexity
//!
//! O(n² log n), dominated by sorting the n(n-1)/2 edges.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ensure_depot, Tour};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::graph::{kruskal_mst, Graph, WeightedEdge};
use crate::models::{ensure_finite, Point};

/// The spanning tree together with the tour derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreedyRoute {
    /// Tree edges in acceptance order.
    pub mst_edges: Vec<WeightedEdge>,
    /// Depth-first tour over the tree, depot first and last.
    pub route: Tour,
}

/// Builds the MST route over planar points.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
/// use u_dispatch::routing::build_greedy_route;
///
/// let points = vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 1.0, 0.0),
///     Point::new(2, 2.0, 0.0),
/// ];
/// let greedy = build_greedy_route(&points, 0).unwrap();
/// assert_eq!(greedy.mst_edges.len(), 2);
/// assert_eq!(greedy.route.stops(), &[0, 1, 2, 0]);
/// ```
pub fn build_greedy_route(points: &[Point], depot: usize) -> Result<GreedyRoute> {
    ensure_depot(depot, points.len())?;
    ensure_finite(points)?;
    spanning_tree_route(&DistanceMatrix::from_points(points), depot)
}

/// Builds the MST route over an arbitrary symmetric distance matrix.
pub fn spanning_tree_route(distances: &DistanceMatrix, depot: usize) -> Result<GreedyRoute> {
    let n = distances.size();
    ensure_depot(depot, n)?;

    if n < 2 {
        return Ok(GreedyRoute {
            mst_edges: Vec::new(),
            route: Tour::from_parts(vec![depot], 0.0),
        });
    }

    let graph = Graph::complete(distances);
    graph.validate()?;
    let mst_edges = kruskal_mst(&graph);
    let adjacency = Graph::adjacency(n, &mst_edges);

    let mut stops = depth_first_order(&adjacency, depot);
    stops.push(depot);
    let route = Tour::new(stops, distances);

    debug!(points = n, depot, cost = route.cost(), "spanning tree route built");
    Ok(GreedyRoute { mst_edges, route })
}

/// Pre-order depth-first traversal from `start`.
///
/// Neighbours are explored in adjacency order; an explicit stack of
/// `(vertex, next neighbour slot)` keeps the same order as the recursive walk.
fn depth_first_order(adjacency: &[Vec<usize>], start: usize) -> Vec<usize> {
    let mut visited = vec![false; adjacency.len()];
    let mut order = Vec::with_capacity(adjacency.len() + 1);
    let mut stack = vec![(start, 0usize)];
    visited[start] = true;
    order.push(start);

    while let Some(top) = stack.last_mut() {
        let (node, slot) = *top;
        match adjacency[node].get(slot) {
            Some(&next) => {
                top.1 += 1;
                if !visited[next] {
                    visited[next] = true;
                    order.push(next);
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
    order
}
