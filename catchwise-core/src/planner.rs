//! The route-planning boundary shared by planner implementations.

use crate::{PointId, Tour};

/// Order merchant stops into a visiting tour.
///
/// Planning never fails: ids without a known position are dropped and inputs
/// with fewer than two located stops come back in their original order.
/// Planners must be `Send + Sync` so a single instance can serve concurrent
/// callers.
///
/// # Examples
/// ```rust
/// use catchwise_core::{PointId, RoutePlanner, Tour};
///
/// struct AsGiven;
///
/// impl RoutePlanner for AsGiven {
///     fn plan(&self, ids: &[PointId]) -> Tour {
///         Tour::new(ids.to_vec())
///     }
/// }
///
/// assert_eq!(AsGiven.plan(&[3, 1]).ids(), &[3, 1]);
/// ```
pub trait RoutePlanner: Send + Sync {
    /// Produce a visiting order for `ids`.
    fn plan(&self, ids: &[PointId]) -> Tour;
}
