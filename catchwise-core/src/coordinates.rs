//! Read-only access to merchant coordinates.
//!
//! The persistence layer that knows where merchants are lives outside this
//! crate. [`CoordinateSource`] is the seam: given ids, return the subset with
//! a known position. Ids without a position are simply absent.

use std::collections::{HashMap, HashSet};
use std::hash::BuildHasher;

use geo::Coord;

use crate::{Point, PointId};

/// Look up positions for merchant ids.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use geo::Coord;
/// use catchwise_core::{CoordinateSource, Point};
///
/// let source = HashMap::from([
///     (1_u64, Coord { x: 129.0, y: 35.1 }),
///     (2_u64, Coord { x: 129.1, y: 35.2 }),
/// ]);
///
/// let points = source.resolve(&[2, 9, 1]);
/// assert_eq!(points, vec![
///     Point::from_lat_lon(2, 35.2, 129.1),
///     Point::from_lat_lon(1, 35.1, 129.0),
/// ]);
/// ```
pub trait CoordinateSource {
    /// Return positions for the ids that have one.
    ///
    /// Missing ids must be left out rather than reported as errors.
    fn coordinates(&self, ids: &[PointId]) -> HashMap<PointId, Coord<f64>>;

    /// Resolve ids to points, keeping request order.
    ///
    /// Ids without a position are dropped. Repeated ids keep only their first
    /// occurrence.
    fn resolve(&self, ids: &[PointId]) -> Vec<Point> {
        let known = self.coordinates(ids);
        let mut seen = HashSet::with_capacity(known.len());
        ids.iter()
            .filter_map(|id| known.get(id).map(|location| Point::new(*id, *location)))
            .filter(|point| seen.insert(point.id))
            .collect()
    }
}

impl<S: BuildHasher> CoordinateSource for HashMap<PointId, Coord<f64>, S> {
    fn coordinates(&self, ids: &[PointId]) -> HashMap<PointId, Coord<f64>> {
        ids.iter()
            .filter_map(|id| self.get(id).map(|location| (*id, *location)))
            .collect()
    }
}

impl CoordinateSource for [Point] {
    fn coordinates(&self, ids: &[PointId]) -> HashMap<PointId, Coord<f64>> {
        let wanted: HashSet<&PointId> = ids.iter().collect();
        let mut found = HashMap::with_capacity(wanted.len());
        for point in self.iter().filter(|point| wanted.contains(&point.id)) {
            found.entry(point.id).or_insert(point.location);
        }
        found
    }
}

impl<T: CoordinateSource + ?Sized> CoordinateSource for &T {
    fn coordinates(&self, ids: &[PointId]) -> HashMap<PointId, Coord<f64>> {
        (**self).coordinates(ids)
    }
}
