//! Geolocated merchant stops.

use geo::Coord;

/// Opaque identifier of a merchant stop.
pub type PointId = u64;

/// A merchant stop with a fixed position.
///
/// Coordinates are decimal degrees with `x = longitude` and `y = latitude`.
/// Identity is the id; two points with the same coordinate are still
/// distinct stops.
///
/// # Examples
/// ```
/// use catchwise_core::Point;
///
/// let point = Point::from_lat_lon(7, 35.1, 129.04);
///
/// assert_eq!(point.id, 7);
/// assert_eq!(point.latitude(), 35.1);
/// assert_eq!(point.longitude(), 129.04);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Stop identifier.
    pub id: PointId,
    /// Position in decimal degrees.
    pub location: Coord<f64>,
}

impl Point {
    /// Construct a `Point` from an id and a coordinate.
    #[must_use]
    pub const fn new(id: PointId, location: Coord<f64>) -> Self {
        Self { id, location }
    }

    /// Construct a `Point` from latitude and longitude in decimal degrees.
    #[must_use]
    pub const fn from_lat_lon(id: PointId, latitude: f64, longitude: f64) -> Self {
        Self::new(
            id,
            Coord {
                x: longitude,
                y: latitude,
            },
        )
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}
