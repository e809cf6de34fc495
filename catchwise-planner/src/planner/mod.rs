//! `MstPlanner` implementation backed by a dense Prim spanning tree.

use std::collections::HashSet;

use catchwise_core::{CoordinateSource, Point, PointId, RoutePlanner, Tour};

use crate::mst::minimum_spanning_tree;

/// Native planner ordering merchant stops by an MST preorder walk.
///
/// The planner is generic over the coordinate lookup so callers can back it
/// with a database, a cache or a plain map.
///
/// # Examples
/// ```
/// use catchwise_core::{RoutePlanner, test_support::MemoryCoordinates};
/// use catchwise_planner::MstPlanner;
///
/// let source = MemoryCoordinates::from_lat_lon([(1, 0.0, 0.0), (2, 2.0, 0.0), (3, 1.0, 0.0)]);
/// let planner = MstPlanner::new(source);
///
/// assert_eq!(planner.plan(&[1, 2, 3]).ids(), &[1, 3, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MstPlanner<S>
where
    S: CoordinateSource,
{
    source: S,
}

impl<S> MstPlanner<S>
where
    S: CoordinateSource,
{
    /// Construct a planner reading positions from `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The coordinate lookup backing this planner.
    pub const fn source(&self) -> &S {
        &self.source
    }
}

impl<S> RoutePlanner for MstPlanner<S>
where
    S: CoordinateSource + Send + Sync,
{
    fn plan(&self, ids: &[PointId]) -> Tour {
        plan(ids, &self.source)
    }
}

/// Plan a visiting order for `ids` using positions from `source`.
///
/// Ids without a position are dropped. Fewer than two located stops are
/// returned unchanged in their original order.
pub fn plan<S>(ids: &[PointId], source: &S) -> Tour
where
    S: CoordinateSource + ?Sized,
{
    let points = source.resolve(ids);
    log::debug!(
        "planning {} of {} requested stops",
        points.len(),
        ids.len()
    );
    plan_points(&points)
}

/// Plan a visiting order over already located stops.
///
/// The first stop is the root of the spanning tree, so it always starts the
/// tour. Repeated ids keep their first occurrence. Stops with a NaN or
/// infinite coordinate cannot be placed and are dropped.
///
/// # Examples
/// ```
/// use catchwise_core::Point;
/// use catchwise_planner::plan_points;
///
/// let tour = plan_points(&[
///     Point::from_lat_lon(10, 0.0, 0.0),
///     Point::from_lat_lon(20, 1.0, 0.0),
///     Point::from_lat_lon(30, 2.0, 0.0),
/// ]);
/// assert_eq!(tour.ids(), &[10, 20, 30]);
/// ```
#[must_use]
pub fn plan_points(points: &[Point]) -> Tour {
    let placeable = placeable_points(points);
    if placeable.len() < 2 {
        return Tour::new(placeable.iter().map(|point| point.id).collect());
    }
    let tree = minimum_spanning_tree(&placeable);
    log::debug!(
        "spanning tree over {} stops has length {:.6}",
        tree.len(),
        tree.total_length()
    );
    Tour::new(tree.preorder())
}

fn placeable_points(points: &[Point]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points
        .iter()
        .filter(|point| {
            let finite = point.location.x.is_finite() && point.location.y.is_finite();
            if !finite {
                log::warn!(
                    "stop {} has a non-finite coordinate; leaving it out of the tour",
                    point.id
                );
            }
            finite
        })
        .filter(|point| seen.insert(point.id))
        .copied()
        .collect()
}
