//! `route` command: order merchant stops into a tour.

use std::io::Write;

use camino::Utf8PathBuf;
use catchwise_core::{Point, PointId, RoutePlanner, Tour};
use catchwise_planner::MstPlanner;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::files::read_json;
use crate::{ARG_REQUEST_PATH, CliError, ENV_ROUTE_REQUEST_PATH, write_json};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a visiting order over merchant stops. The request is a \
                 JSON file listing stops with their coordinates and, \
                 optionally, the ids to visit; the first id starts the tour.",
    about = "Order merchant stops into a short tour"
)]
#[ortho_config(prefix = "CATCHWISE")]
pub(crate) struct RouteArgs {
    /// Path to a JSON route request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RouteConfig::try_from(merged)
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteConfig {
    pub(crate) request_path: Utf8PathBuf,
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST_PATH,
            env: ENV_ROUTE_REQUEST_PATH,
        })?;
        Ok(Self { request_path })
    }
}

/// A merchant stop as it appears in a route request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct RouteStop {
    pub(crate) id: PointId,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
}

/// JSON body of a route request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RouteRequest {
    pub(crate) points: Vec<RouteStop>,
    /// Ids to visit; defaults to every stop in listed order.
    #[serde(default)]
    pub(crate) order: Option<Vec<PointId>>,
}

impl RouteRequest {
    pub(crate) fn plan(&self) -> Tour {
        let located: Vec<Point> = self
            .points
            .iter()
            .map(|stop| Point::from_lat_lon(stop.id, stop.latitude, stop.longitude))
            .collect();
        let order = self
            .order
            .clone()
            .unwrap_or_else(|| located.iter().map(|point| point.id).collect());
        let planner = MstPlanner::new(located.as_slice());
        planner.plan(&order)
    }
}

pub(crate) fn run_route_with(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let request: RouteRequest = read_json(&config.request_path, ARG_REQUEST_PATH)?;
    let tour = request.plan();
    log::info!(
        "planned a tour over {} of {} stops",
        tour.len(),
        request.points.len()
    );
    write_json(writer, &tour)
}
