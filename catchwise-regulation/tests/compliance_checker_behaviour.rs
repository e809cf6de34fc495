//! Behavioural tests for the compliance checker.

use catchwise_regulation::{ComplianceChecker, Verdict};
use chrono::NaiveDate;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug, Default)]
struct ComplianceWorld {
    checker: RefCell<Option<ComplianceChecker>>,
    verdict: RefCell<Option<Verdict>>,
}

impl ComplianceWorld {
    fn check(&self, species: &str, length_cm: Option<f64>, weight_kg: Option<f64>, today: NaiveDate) {
        let verdict = self
            .checker
            .borrow()
            .as_ref()
            .map(|checker| checker.check(species, length_cm, weight_kg, today))
            .expect("checker should be configured")
            .expect("measurements should be valid");
        self.verdict.replace(Some(verdict));
    }

    fn verdict(&self) -> Verdict {
        self.verdict
            .borrow()
            .clone()
            .expect("verdict should be recorded")
    }
}

#[fixture]
fn world() -> ComplianceWorld {
    ComplianceWorld::default()
}

#[given("the standard regulation tables")]
fn standard_tables(world: &ComplianceWorld) {
    world.checker.replace(Some(ComplianceChecker::standard()));
}

#[when("I check a {species} of {length} cm on {date}")]
fn check_by_length(world: &ComplianceWorld, species: String, length: f64, date: NaiveDate) {
    world.check(&species, Some(length), None, date);
}

#[when("I check a {species} weighing {weight} kg on {date}")]
fn check_by_weight(world: &ComplianceWorld, species: String, weight: f64, date: NaiveDate) {
    world.check(&species, None, Some(weight), date);
}

#[then("the specimen is forbidden")]
fn is_forbidden(world: &ComplianceWorld) {
    assert!(world.verdict().forbidden);
}

#[then("the specimen is allowed")]
fn is_allowed(world: &ComplianceWorld) {
    assert_eq!(world.verdict(), Verdict::allowed());
}

#[then("the reason cites the {window} closed season")]
fn reason_season(world: &ComplianceWorld, window: String) {
    assert_eq!(
        world.verdict().reason_message(),
        Some(format!("금지 기간입니다 ({window})"))
    );
}

#[then("the reason cites the {limit} cm length limit")]
fn reason_length(world: &ComplianceWorld, limit: f64) {
    assert_eq!(
        world.verdict().reason_message(),
        Some(format!("체장 금지 규격 ({limit:?}cm 이하)"))
    );
}

#[then("the reason cites the {limit} g weight limit")]
fn reason_weight(world: &ComplianceWorld, limit: f64) {
    assert_eq!(
        world.verdict().reason_message(),
        Some(format!("체중 금지 규격 ({limit:?}g 이하)"))
    );
}

#[scenario(path = "tests/features/compliance_checker.feature", index = 0)]
fn winter_season_christmas(world: ComplianceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/compliance_checker.feature", index = 1)]
fn winter_season_january(world: ComplianceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/compliance_checker.feature", index = 2)]
fn winter_season_summer(world: ComplianceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/compliance_checker.feature", index = 3)]
fn mackerel_length_boundary(world: ComplianceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/compliance_checker.feature", index = 4)]
fn octopus_underweight(world: ComplianceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/compliance_checker.feature", index = 5)]
fn octopus_heavy_enough(world: ComplianceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/compliance_checker.feature", index = 6)]
fn season_outranks_size(world: ComplianceWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/compliance_checker.feature", index = 7)]
fn overlapping_seasons(world: ComplianceWorld) {
    let _ = world;
}
