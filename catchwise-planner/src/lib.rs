//! Minimum-spanning-tree route planner for Catchwise.
//!
//! This crate provides [`MstPlanner`], the default implementation of the
//! [`RoutePlanner`](catchwise_core::RoutePlanner) trait. It resolves merchant
//! ids through a [`CoordinateSource`](catchwise_core::CoordinateSource),
//! builds a minimum spanning tree over the located stops with a dense Prim
//! pass, and walks the tree in preorder to produce a visiting order.
//!
//! Planar distance on a metric space satisfies the triangle inequality, so
//! the closed tour obtained from the preorder walk is at most twice as long as
//! the optimal travelling-salesman tour. Distances are computed directly on
//! raw (latitude, longitude) degrees rather than geodesically, which is
//! accurate enough at the scale of a single fish market.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod mst;
mod planner;

pub use mst::{SpanningEdge, SpanningTree, minimum_spanning_tree};
pub use planner::{MstPlanner, plan, plan_points};
