//! Property-based tests for the MST planner.
//!
//! # Invariants tested
//!
//! - **Completeness:** the tour is a permutation of the located request ids.
//! - **Root:** the first located id always starts the tour.
//! - **Tree bound:** the open tour is never shorter than the spanning tree.
//! - **Approximation:** the closed tour is at most twice the optimum.
//! - **Determinism:** identical inputs produce identical tours.

mod proptest_support;

use std::collections::HashSet;

use catchwise_core::{PointId, RoutePlanner, test_support::MemoryCoordinates};
use catchwise_planner::{MstPlanner, minimum_spanning_tree, plan_points};
use proptest::prelude::*;

use proptest_support::{optimal_closed_length, point_set_strategy, request_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: the tour visits exactly the located ids, each once.
    #[test]
    fn tour_is_permutation_of_located_ids(
        points in point_set_strategy(0, 25),
        request in request_strategy(30, 40),
    ) {
        let known: HashSet<PointId> = points.iter().map(|p| p.id).collect();
        let planner = MstPlanner::new(MemoryCoordinates::with_points(points));
        let tour = planner.plan(&request);

        let mut expected: Vec<PointId> = Vec::new();
        for id in &request {
            if known.contains(id) && !expected.contains(id) {
                expected.push(*id);
            }
        }
        let mut visited = tour.ids().to_vec();
        visited.sort_unstable();
        let mut wanted = expected.clone();
        wanted.sort_unstable();
        prop_assert_eq!(visited, wanted);
        prop_assert_eq!(tour.ids().first(), expected.first());
    }

    /// Property: no tour through every stop beats the spanning tree.
    #[test]
    fn open_tour_is_at_least_the_tree_length(points in point_set_strategy(2, 30)) {
        let tree = minimum_spanning_tree(&points);
        let tour = plan_points(&points);
        prop_assert!(tour.path_length(&points) + 1e-9 >= tree.total_length());
    }

    /// Property: the preorder tour is a 2-approximation of the optimal tour.
    #[test]
    fn closed_tour_is_within_twice_optimal(points in point_set_strategy(2, 7)) {
        let tour = plan_points(&points);
        let optimal = optimal_closed_length(&points);
        prop_assert!(
            tour.closed_length(&points) <= 2.0 * optimal + 1e-9,
            "tour {} exceeds twice the optimum {}",
            tour.closed_length(&points),
            optimal
        );
    }

    /// Property: planning is a pure function of its input.
    #[test]
    fn planning_is_deterministic(points in point_set_strategy(0, 20)) {
        prop_assert_eq!(plan_points(&points), plan_points(&points));
    }
}
