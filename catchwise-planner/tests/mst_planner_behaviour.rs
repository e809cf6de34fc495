//! Behavioural tests for the MST planner.

use catchwise_core::{PointId, RoutePlanner, Tour, test_support::MemoryCoordinates};
use catchwise_planner::MstPlanner;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

const A: PointId = 1;
const B: PointId = 2;
const C: PointId = 3;
const UNKNOWN: PointId = 404;

#[derive(Debug, Default)]
struct PlannerWorld {
    planner: RefCell<Option<MstPlanner<MemoryCoordinates>>>,
    tour: RefCell<Option<Tour>>,
}

impl PlannerWorld {
    fn plan(&self, ids: &[PointId]) {
        let tour = self
            .planner
            .borrow()
            .as_ref()
            .map(|planner| planner.plan(ids))
            .expect("planner should be configured");
        self.tour.replace(Some(tour));
    }

    fn tour_ids(&self) -> Vec<PointId> {
        self.tour
            .borrow()
            .clone()
            .expect("tour should be planned")
            .into_ids()
    }
}

#[fixture]
fn world() -> PlannerWorld {
    PlannerWorld::default()
}

#[given("merchants A at 0,0 and B at 1,0 and C at 2,0")]
fn given_collinear(world: &PlannerWorld) {
    let source = MemoryCoordinates::from_lat_lon([(A, 0.0, 0.0), (B, 1.0, 0.0), (C, 2.0, 0.0)]);
    world.planner.replace(Some(MstPlanner::new(source)));
}

#[when("I plan a tour for A, B and C")]
fn plan_all(world: &PlannerWorld) {
    world.plan(&[A, B, C]);
}

#[when("I plan a tour for B only")]
fn plan_single(world: &PlannerWorld) {
    world.plan(&[B]);
}

#[when("I plan a tour for nobody")]
fn plan_empty(world: &PlannerWorld) {
    world.plan(&[]);
}

#[when("I plan a tour for C, an unknown merchant and A")]
fn plan_with_unknown(world: &PlannerWorld) {
    world.plan(&[C, UNKNOWN, A]);
}

#[then("the tour is A, B, C")]
fn tour_is_chain(world: &PlannerWorld) {
    assert_eq!(world.tour_ids(), vec![A, B, C]);
}

#[then("the tour is B")]
fn tour_is_single(world: &PlannerWorld) {
    assert_eq!(world.tour_ids(), vec![B]);
}

#[then("the tour is empty")]
fn tour_is_empty(world: &PlannerWorld) {
    assert!(world.tour_ids().is_empty());
}

#[then("the tour is C, A")]
fn tour_skips_unknown(world: &PlannerWorld) {
    assert_eq!(world.tour_ids(), vec![C, A]);
}

#[scenario(path = "tests/features/mst_planner.feature", index = 0)]
fn collinear_chain(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/mst_planner.feature", index = 1)]
fn single_merchant(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/mst_planner.feature", index = 2)]
fn empty_request(world: PlannerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/mst_planner.feature", index = 3)]
fn unknown_merchants_dropped(world: PlannerWorld) {
    let _ = world;
}
