//! Dense Prim construction and preorder traversal.
//!
//! The tree is rooted at the first point. Among unvisited points the one
//! with the smallest connecting distance joins next; ties go to the point
//! that appears earliest in the input. Adjacency lists record neighbours in
//! the order their edges were added, and the preorder walk follows that
//! order.

use catchwise_core::{Point, PointId};
use geo::{Distance, Euclidean};

/// An undirected tree edge between two stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanningEdge {
    /// Stop already in the tree when the edge was added.
    pub parent: PointId,
    /// Stop that joined the tree through this edge.
    pub child: PointId,
    /// Planar length of the edge in degrees.
    pub length: f64,
}

/// A minimum spanning tree over a set of stops.
///
/// # Examples
/// ```
/// use catchwise_core::Point;
/// use catchwise_planner::minimum_spanning_tree;
///
/// let points = [
///     Point::from_lat_lon(1, 0.0, 0.0),
///     Point::from_lat_lon(2, 1.0, 0.0),
///     Point::from_lat_lon(3, 2.0, 0.0),
/// ];
/// let tree = minimum_spanning_tree(&points);
///
/// assert_eq!(tree.edges().len(), 2);
/// assert!((tree.total_length() - 2.0).abs() < 1e-12);
/// assert_eq!(tree.preorder(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpanningTree {
    ids: Vec<PointId>,
    adjacency: Vec<Vec<usize>>,
    edges: Vec<SpanningEdge>,
}

impl SpanningTree {
    /// Edges in the order Prim's algorithm added them.
    #[must_use]
    pub fn edges(&self) -> &[SpanningEdge] {
        &self.edges
    }

    /// Sum of all edge lengths.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.edges.iter().map(|edge| edge.length).sum()
    }

    /// Number of stops spanned by the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the tree spans no stops.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Walk the tree depth-first from the root, emitting each stop before its
    /// subtrees.
    ///
    /// Neighbours are visited in edge-discovery order. The walk keeps an
    /// explicit stack so deep trees (a chain of collinear stops, say) cannot
    /// exhaust the call stack.
    #[must_use]
    pub fn preorder(&self) -> Vec<PointId> {
        let mut order = Vec::with_capacity(self.ids.len());
        if self.ids.is_empty() {
            return order;
        }
        let mut seen = vec![false; self.ids.len()];
        let mut stack = vec![0_usize];
        while let Some(node) = stack.pop() {
            let Some(flag) = seen.get_mut(node) else {
                continue;
            };
            if *flag {
                continue;
            }
            *flag = true;
            if let Some(id) = self.ids.get(node) {
                order.push(*id);
            }
            if let Some(neighbours) = self.adjacency.get(node) {
                // Reverse so the first-recorded neighbour is popped first.
                stack.extend(
                    neighbours
                        .iter()
                        .rev()
                        .filter(|next| !seen.get(**next).copied().unwrap_or(true)),
                );
            }
        }
        order
    }

    fn link(&mut self, parent: usize, child: usize, length: f64) {
        if let Some(list) = self.adjacency.get_mut(parent) {
            list.push(child);
        }
        if let Some(list) = self.adjacency.get_mut(child) {
            list.push(parent);
        }
        if let (Some(parent_id), Some(child_id)) = (self.ids.get(parent), self.ids.get(child)) {
            self.edges.push(SpanningEdge {
                parent: *parent_id,
                child: *child_id,
                length,
            });
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Frontier {
    distance: f64,
    parent: Option<usize>,
    visited: bool,
}

impl Frontier {
    const UNREACHED: Self = Self {
        distance: f64::INFINITY,
        parent: None,
        visited: false,
    };
}

/// Build a minimum spanning tree over `points` with dense Prim, O(n²).
///
/// The first point is the root. Callers are expected to pass finite
/// coordinates and distinct ids.
#[must_use]
pub fn minimum_spanning_tree(points: &[Point]) -> SpanningTree {
    let mut tree = SpanningTree {
        ids: points.iter().map(|point| point.id).collect(),
        adjacency: vec![Vec::new(); points.len()],
        edges: Vec::with_capacity(points.len().saturating_sub(1)),
    };
    let mut frontier = vec![Frontier::UNREACHED; points.len()];
    if let Some(root) = frontier.first_mut() {
        root.distance = 0.0;
    }

    while let Some(current) = closest_unvisited(&frontier) {
        let Some(state) = frontier.get_mut(current) else {
            break;
        };
        state.visited = true;
        let (parent, length) = (state.parent, state.distance);
        if let Some(parent_index) = parent {
            tree.link(parent_index, current, length);
        }
        let Some(origin) = points.get(current) else {
            break;
        };
        relax(points, &mut frontier, current, origin);
    }
    tree
}

fn closest_unvisited(frontier: &[Frontier]) -> Option<usize> {
    frontier
        .iter()
        .enumerate()
        .filter(|(_, state)| !state.visited)
        .fold(None, |best: Option<(usize, f64)>, (index, state)| match best {
            // Only a strictly closer point displaces an earlier one.
            Some((_, distance)) if distance <= state.distance => best,
            _ => Some((index, state.distance)),
        })
        .map(|(index, _)| index)
}

fn relax(points: &[Point], frontier: &mut [Frontier], current: usize, origin: &Point) {
    let from = geo::Point::from(origin.location);
    for (candidate, state) in points.iter().zip(frontier.iter_mut()) {
        if state.visited {
            continue;
        }
        let distance = Euclidean.distance(from, geo::Point::from(candidate.location));
        if distance < state.distance {
            state.distance = distance;
            state.parent = Some(current);
        }
    }
}
