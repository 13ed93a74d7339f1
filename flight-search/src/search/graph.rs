//! Route graph: flights grouped by origin airport.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Flight, IataCode};

/// Adjacency structure mapping each airport to the flights departing it.
///
/// Built once from the full dataset and read-only afterwards. Within each
/// airport's group the dataset order is preserved; enumeration walks the
/// groups in that order, so it determines tie-broken output order before
/// the final price sort.
#[derive(Debug, Default)]
pub struct RouteGraph {
    routes: HashMap<IataCode, Vec<Arc<Flight>>>,
}

impl RouteGraph {
    /// Group flights by origin, wrapping each in `Arc` so paths can share
    /// legs without copying records.
    pub fn build(flights: impl IntoIterator<Item = Flight>) -> Self {
        let mut routes: HashMap<IataCode, Vec<Arc<Flight>>> = HashMap::new();
        for flight in flights {
            routes
                .entry(flight.origin())
                .or_default()
                .push(Arc::new(flight));
        }
        Self { routes }
    }

    /// Returns the flights departing `airport`, in dataset order.
    ///
    /// Airports without outbound flights yield an empty slice.
    pub fn departures_from(&self, airport: IataCode) -> &[Arc<Flight>] {
        self.routes.get(&airport).map_or(&[], Vec::as_slice)
    }

    /// Returns true if at least one flight departs `airport`.
    pub fn serves(&self, airport: IataCode) -> bool {
        self.routes.contains_key(&airport)
    }

    /// Returns the number of airports with outbound flights.
    pub fn airport_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns the total number of flights in the graph.
    pub fn flight_count(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn iata(s: &str) -> IataCode {
        IataCode::parse(s).unwrap()
    }

    fn dt(s: &str) -> NaiveDateTime {
        s.parse().unwrap()
    }

    fn make_flight(no: &str, origin: &str, destination: &str) -> Flight {
        Flight::new(
            no.to_string(),
            iata(origin),
            iata(destination),
            dt("2021-09-09T10:00:00"),
            dt("2021-09-09T12:00:00"),
            100.0,
            5,
            2,
        )
        .unwrap()
    }

    #[test]
    fn groups_by_origin() {
        let graph = RouteGraph::build(vec![
            make_flight("A1", "PRG", "LHR"),
            make_flight("A2", "PRG", "VIE"),
            make_flight("B1", "LHR", "JFK"),
        ]);

        assert_eq!(graph.airport_count(), 2);
        assert_eq!(graph.flight_count(), 3);
        assert_eq!(graph.departures_from(iata("PRG")).len(), 2);
        assert_eq!(graph.departures_from(iata("LHR")).len(), 1);
    }

    #[test]
    fn preserves_dataset_order_within_group() {
        let graph = RouteGraph::build(vec![
            make_flight("A3", "PRG", "LHR"),
            make_flight("A1", "PRG", "VIE"),
            make_flight("A2", "PRG", "JFK"),
        ]);

        let numbers: Vec<&str> = graph
            .departures_from(iata("PRG"))
            .iter()
            .map(|f| f.flight_no())
            .collect();
        assert_eq!(numbers, vec!["A3", "A1", "A2"]);
    }

    #[test]
    fn unknown_airport_is_empty() {
        let graph = RouteGraph::build(vec![make_flight("A1", "PRG", "LHR")]);

        assert!(graph.departures_from(iata("JFK")).is_empty());
        assert!(!graph.serves(iata("JFK")));
        // Destination-only airports have no entry either
        assert!(!graph.serves(iata("LHR")));
    }

    #[test]
    fn empty_dataset() {
        let graph = RouteGraph::build(vec![]);
        assert_eq!(graph.airport_count(), 0);
        assert_eq!(graph.flight_count(), 0);
    }
}
