//! Exhaustive path enumeration.
//!
//! Finds every simple flight path between two airports that satisfies the
//! layover window and baggage capacity. The traversal is depth-first over
//! the route graph, run on an explicit stack so path depth is bounded by
//! the airport count rather than the native call stack.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Flight, IataCode};

use super::config::{LayoverBound, SearchConfig};
use super::graph::RouteGraph;

/// One DFS frame: a partial path and the state needed to extend it.
///
/// Each frame owns its path and visited set outright, so recording a
/// finished path is a move, never a copy of shared state.
#[derive(Debug, Clone)]
struct PathFrame {
    /// Airport the path currently ends at (the start if the path is empty).
    location: IataCode,

    /// Flights taken so far.
    legs: Vec<Arc<Flight>>,

    /// Airports the path has touched, seeded with the start.
    visited: HashSet<IataCode>,
}

/// Enumerate every simple path from `start` to `target`.
///
/// Exhaustive and duplicate-free: each constraint-satisfying path appears
/// exactly once, in depth-first pre-order over the graph's dataset-ordered
/// adjacency lists. A path ends at its first arrival at `target`; the
/// empty path is never a result, so searching an airport against itself
/// finds nothing.
pub(super) fn enumerate_paths(
    graph: &RouteGraph,
    start: IataCode,
    target: IataCode,
    bags_requested: u32,
    config: &SearchConfig,
    bound: LayoverBound,
) -> Vec<Vec<Arc<Flight>>> {
    let min_layover = config.min_layover();
    let max_layover = config.max_layover();

    let mut paths = Vec::new();
    let mut stack = vec![PathFrame {
        location: start,
        legs: Vec::new(),
        visited: HashSet::from([start]),
    }];

    while let Some(frame) = stack.pop() {
        if !frame.legs.is_empty() && frame.location == target {
            // First arrival at the target ends the path; never extend past it.
            paths.push(frame.legs);
            continue;
        }

        // Push candidates in reverse so the stack pops them in dataset
        // order, reproducing recursive DFS pre-order.
        for flight in graph.departures_from(frame.location).iter().rev() {
            if frame.visited.contains(&flight.destination()) {
                continue;
            }

            if flight.bags_allowed() < bags_requested {
                continue;
            }

            if let Some(last) = frame.legs.last() {
                let layover = last.layover_to(flight);
                if !bound.admits(layover, min_layover, max_layover) {
                    continue;
                }
            }

            let mut legs = frame.legs.clone();
            legs.push(Arc::clone(flight));
            let mut visited = frame.visited.clone();
            visited.insert(flight.destination());

            stack.push(PathFrame {
                location: flight.destination(),
                legs,
                visited,
            });
        }
    }

    debug!(
        start = %start,
        target = %target,
        paths = paths.len(),
        "path enumeration complete"
    );

    paths
}
