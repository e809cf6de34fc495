//! Visiting orders through merchant stops.
//!
//! A tour is an open path: no closing edge back to the first stop is stored.

use std::collections::HashMap;

use geo::{Distance, Euclidean};

use crate::{Point, PointId};

/// An ordered sequence of stop identifiers.
///
/// # Examples
/// ```
/// use catchwise_core::Tour;
///
/// let tour = Tour::new(vec![3, 1, 2]);
///
/// assert_eq!(tour.ids(), &[3, 1, 2]);
/// assert_eq!(tour.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    #[cfg_attr(feature = "serde", serde(rename = "points"))]
    ids: Vec<PointId>,
}

impl Tour {
    /// Construct a tour from ids in visiting order.
    #[must_use]
    pub const fn new(ids: Vec<PointId>) -> Self {
        Self { ids }
    }

    /// Construct an empty tour.
    ///
    /// # Examples
    /// ```
    /// use catchwise_core::Tour;
    ///
    /// assert!(Tour::empty().is_empty());
    /// ```
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Stop identifiers in visiting order.
    #[must_use]
    pub fn ids(&self) -> &[PointId] {
        &self.ids
    }

    /// Number of stops on the tour.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the tour visits no stops.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Consume the tour, returning the ordered ids.
    #[must_use]
    pub fn into_ids(self) -> Vec<PointId> {
        self.ids
    }

    /// Planar length of the open path through `points`.
    ///
    /// Ids without a matching point are skipped.
    ///
    /// # Examples
    /// ```
    /// use catchwise_core::{Point, Tour};
    ///
    /// let points = [
    ///     Point::from_lat_lon(1, 0.0, 0.0),
    ///     Point::from_lat_lon(2, 3.0, 4.0),
    /// ];
    /// let tour = Tour::new(vec![1, 2]);
    /// assert!((tour.path_length(&points) - 5.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn path_length(&self, points: &[Point]) -> f64 {
        self.leg_lengths(points, false)
    }

    /// Planar length of the path including the closing leg back to the start.
    #[must_use]
    pub fn closed_length(&self, points: &[Point]) -> f64 {
        self.leg_lengths(points, true)
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "tour length sums planar leg distances"
    )]
    fn leg_lengths(&self, points: &[Point], closed: bool) -> f64 {
        let index: HashMap<PointId, geo::Point<f64>> = points
            .iter()
            .map(|point| (point.id, geo::Point::from(point.location)))
            .collect();
        let located: Vec<geo::Point<f64>> = self
            .ids
            .iter()
            .filter_map(|id| index.get(id).copied())
            .collect();
        let open: f64 = located
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some(Euclidean.distance(*from, *to)),
                _ => None,
            })
            .sum();
        if !closed {
            return open;
        }
        match (located.first(), located.last()) {
            (Some(first), Some(last)) if located.len() > 1 => {
                open + Euclidean.distance(*last, *first)
            }
            _ => open,
        }
    }
}

impl From<Vec<PointId>> for Tour {
    fn from(ids: Vec<PointId>) -> Self {
        Self::new(ids)
    }
}

impl IntoIterator for Tour {
    type Item = PointId;
    type IntoIter = std::vec::IntoIter<PointId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.into_iter()
    }
}
