//! Proptest strategies and reference solutions for planner property tests.
//!
//! Generators keep coordinates inside a market-sized box of decimal degrees
//! and hand out distinct ids so every generated stop is plannable.

use catchwise_core::{Point, PointId, Tour};
use proptest::prelude::*;

/// Strategy for a set of located stops with distinct ids `1..=count`.
pub fn point_set_strategy(min_count: usize, max_count: usize) -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec(coordinate_strategy(), min_count..=max_count).prop_map(|coords| {
        coords
            .into_iter()
            .zip(1_u64..)
            .map(|((latitude, longitude), id)| Point::from_lat_lon(id, latitude, longitude))
            .collect()
    })
}

/// Strategy for request ids drawn from `0..=max_id`, repeats included.
pub fn request_strategy(max_id: PointId, max_len: usize) -> impl Strategy<Value = Vec<PointId>> {
    proptest::collection::vec(0..=max_id, 0..=max_len)
}

fn coordinate_strategy() -> impl Strategy<Value = (f64, f64)> {
    (35.0_f64..35.2_f64, 129.0_f64..129.2_f64)
}

/// Length of the shortest closed tour through `points`, by exhaustive search.
///
/// The first point is fixed as the start, so `n` points cost `(n - 1)!`
/// permutations. Keep `n` small.
pub fn optimal_closed_length(points: &[Point]) -> f64 {
    let Some((first, rest)) = points.split_first() else {
        return 0.0;
    };
    let mut remaining: Vec<PointId> = rest.iter().map(|point| point.id).collect();
    let mut best = f64::INFINITY;
    permute(&mut remaining, 0, &mut |order| {
        let mut ids = Vec::with_capacity(order.len() + 1);
        ids.push(first.id);
        ids.extend_from_slice(order);
        let length = Tour::new(ids).closed_length(points);
        if length < best {
            best = length;
        }
    });
    best
}

fn permute(ids: &mut [PointId], start: usize, visit: &mut dyn FnMut(&[PointId])) {
    if start >= ids.len() {
        visit(ids);
        return;
    }
    for index in start..ids.len() {
        ids.swap(start, index);
        permute(ids, start + 1, visit);
        ids.swap(start, index);
    }
}
