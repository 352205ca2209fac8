//! Distance-ordered routes split across partners.
//!
//! Stops are sorted by their distance from the depot (stable, so equidistant
//! stops keep their input order), cut into contiguous, near-equal chunks,
//! and each chunk is driven as `depot → chunk → depot`. Cheap and
//! predictable; the nearest ring goes to the first partner.

use tracing::debug;

use super::{ensure_depot, Tour};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{ensure_finite, Point};

/// Non-depot indices ordered by distance from `depot`.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
/// use u_dispatch::distance::DistanceMatrix;
/// use u_dispatch::routing::radial_order;
///
/// let points = vec![
///     Point::new(0, 0.0, 0.0),
///     Point::new(1, 5.0, 0.0),
///     Point::new(2, 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(radial_order(&dm, 0), vec![2, 1]);
/// ```
pub fn radial_order(distances: &DistanceMatrix, depot: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..distances.size()).filter(|&i| i != depot).collect();
    order.sort_by(|&a, &b| distances.get(depot, a).total_cmp(&distances.get(depot, b)));
    order
}

/// Splits `items` into `parts` contiguous chunks whose sizes differ by at
/// most one, larger chunks first. Empty chunks are omitted.
pub(crate) fn split_even(items: &[usize], parts: usize) -> Vec<&[usize]> {
    if parts == 0 {
        return Vec::new();
    }
    let base = items.len() / parts;
    let extra = items.len() % parts;
    let mut chunks = Vec::with_capacity(parts);
    let mut start = 0;
    for k in 0..parts {
        let len = base + usize::from(k < extra);
        if len == 0 {
            continue;
        }
        chunks.push(&items[start..start + len]);
        start += len;
    }
    chunks
}

/// Builds up to `partner_count` radial routes over a distance matrix.
///
/// Returns no routes when `partner_count` is zero or there are no stops
/// besides the depot.
pub fn radial_routes(distances: &DistanceMatrix, depot: usize, partner_count: usize) -> Result<Vec<Tour>> {
    ensure_depot(depot, distances.size())?;
    let order = radial_order(distances, depot);
    let routes: Vec<Tour> = split_even(&order, partner_count)
        .into_iter()
        .map(|chunk| {
            let mut stops = Vec::with_capacity(chunk.len() + 2);
            stops.push(depot);
            stops.extend_from_slice(chunk);
            stops.push(depot);
            Tour::new(stops, distances)
        })
        .collect();

    debug!(
        points = distances.size(),
        partners = partner_count,
        routes = routes.len(),
        "radial routes built"
    );
    Ok(routes)
}

/// Builds radial routes over planar points.
pub fn build_radial_routes(points: &[Point], depot: usize, partner_count: usize) -> Result<Vec<Tour>> {
    ensure_depot(depot, points.len())?;
    ensure_finite(points)?;
    radial_routes(&DistanceMatrix::from_points(points), depot, partner_count)
}
