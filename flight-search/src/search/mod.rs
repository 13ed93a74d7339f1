//! Journey search.
//!
//! The core of the system: exhaustive enumeration of constraint-
//! satisfying flight paths over the route graph, optional round-trip
//! composition, and pricing into a result list sorted by total price.

mod compose;
mod config;
mod enumerate;
mod graph;

pub use config::{LayoverBound, SearchConfig};
pub use graph::RouteGraph;

use tracing::debug;

use crate::domain::{IataCode, Journey};

use compose::cross_join;
use enumerate::enumerate_paths;

/// Parameters of one search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Origin airport.
    pub origin: IataCode,

    /// Destination airport.
    pub destination: IataCode,

    /// Number of bags every leg must allow.
    pub bags: u32,

    /// Whether to also fly back and compose round trips.
    pub round_trip: bool,
}

impl SearchRequest {
    /// A one-way search.
    pub fn one_way(origin: IataCode, destination: IataCode, bags: u32) -> Self {
        Self {
            origin,
            destination,
            bags,
            round_trip: false,
        }
    }

    /// A round-trip search.
    pub fn round_trip(origin: IataCode, destination: IataCode, bags: u32) -> Self {
        Self {
            origin,
            destination,
            bags,
            round_trip: true,
        }
    }
}

/// Find every journey satisfying the request, cheapest first.
///
/// Returns an empty list — never an error — when the origin or the
/// destination has no outbound flights in the graph, or when no path
/// satisfies the constraints. The sort is stable, so journeys with equal
/// prices keep their enumeration order and repeated runs over the same
/// dataset produce identical output.
pub fn search(graph: &RouteGraph, request: &SearchRequest, config: &SearchConfig) -> Vec<Journey> {
    if !graph.serves(request.origin) || !graph.serves(request.destination) {
        debug!(
            origin = %request.origin,
            destination = %request.destination,
            "endpoint has no outbound flights, returning empty"
        );
        return Vec::new();
    }

    let outbound = enumerate_paths(
        graph,
        request.origin,
        request.destination,
        request.bags,
        config,
        config.outbound_bound,
    );

    let paths = if request.round_trip {
        let inbound = enumerate_paths(
            graph,
            request.destination,
            request.origin,
            request.bags,
            config,
            config.return_bound,
        );
        cross_join(&outbound, &inbound, config.min_turnaround())
    } else {
        outbound
    };

    let mut journeys: Vec<Journey> = paths
        .into_iter()
        .filter_map(|legs| Journey::price(legs, request.bags).ok())
        .collect();

    journeys.sort_by(|a, b| a.total_price().total_cmp(&b.total_price()));

    debug!(journeys = journeys.len(), "search complete");
    journeys
}
