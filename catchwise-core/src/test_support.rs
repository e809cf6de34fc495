//! Test-only, in-memory `CoordinateSource` used by unit and behaviour tests.

use std::collections::HashMap;

use geo::Coord;

use crate::{CoordinateSource, Point, PointId};

/// In-memory `CoordinateSource` implementation used in tests.
///
/// Lookups are a linear scan over the stored points; keep datasets small.
#[derive(Default, Debug, Clone)]
pub struct MemoryCoordinates {
    points: Vec<Point>,
}

impl MemoryCoordinates {
    /// Create a source from a collection of points.
    pub fn with_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Create a source from `(id, latitude, longitude)` triples.
    pub fn from_lat_lon<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (PointId, f64, f64)>,
    {
        Self::with_points(
            triples
                .into_iter()
                .map(|(id, latitude, longitude)| Point::from_lat_lon(id, latitude, longitude)),
        )
    }

    /// Stored points in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl CoordinateSource for MemoryCoordinates {
    fn coordinates(&self, ids: &[PointId]) -> HashMap<PointId, Coord<f64>> {
        self.points.as_slice().coordinates(ids)
    }
}
