//! Behaviour-driven step definitions driving the route CLI scenarios.

use super::helpers::{output_json, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct RouteWorld {
    _tmp: TempDir,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RouteWorld {
    fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self {
            _tmp: tmp,
            request_path: root.join("request.json"),
            include_request: RefCell::new(true),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["catchwise".to_owned(), "route".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv
    }

    fn assert_failure(&self, check: impl FnOnce(&CliError)) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error);
    }
}

#[fixture]
fn world() -> RouteWorld {
    RouteWorld::new()
}

#[given("a route request with three collinear merchants")]
fn collinear_request(#[from(world)] world: &RouteWorld) {
    let request = json!({
        "points": [
            {"id": 1, "latitude": 35.1, "longitude": 129.00},
            {"id": 2, "latitude": 35.1, "longitude": 129.02},
            {"id": 3, "latitude": 35.1, "longitude": 129.01}
        ]
    });
    write_utf8(&world.request_path, request.to_string().as_bytes());
}

#[given("the route request contains invalid JSON")]
fn invalid_request(#[from(world)] world: &RouteWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("I omit the route request path")]
fn omit_request_path(#[from(world)] world: &RouteWorld) {
    *world.include_request.borrow_mut() = false;
}

#[when("I run the route command")]
fn run_route_command(#[from(world)] world: &RouteWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| {
        let mut buffer = world.stdout.borrow_mut();
        run_with(cli, &mut *buffer)
    });
    world.result.replace(Some(outcome));
}

#[then("the command prints the tour 1, 3, 2")]
fn prints_tour(#[from(world)] world: &RouteWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    assert!(result.is_ok(), "expected success, got {result:?}");
    assert_eq!(output_json(&world.stdout.borrow()), json!({"points": [1, 3, 2]}));
}

#[then("the command fails because the request JSON is invalid")]
fn fails_invalid_json(#[from(world)] world: &RouteWorld) {
    world.assert_failure(|error| match error {
        CliError::ParseInput { field, .. } => assert_eq!(*field, ARG_REQUEST_PATH),
        other => panic!("expected ParseInput, found {other:?}"),
    });
}

#[then("the command fails because the request path is missing")]
fn fails_missing_path(#[from(world)] world: &RouteWorld) {
    world.assert_failure(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_REQUEST_PATH),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

macro_rules! register_route_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/route_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RouteWorld) {
            let _ = world;
        }
    };
}

register_route_scenario!(route_happy_path, "planning a tour from a JSON request");
register_route_scenario!(route_invalid_json, "rejecting invalid JSON input");
register_route_scenario!(route_missing_request, "rejecting missing request paths");
