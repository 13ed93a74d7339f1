//! JSON rendering of search results.
//!
//! Maps domain journeys into serializable records. The shapes here are
//! output-only and deliberately separate from the domain types, so the
//! wire format can evolve without touching the search.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::domain::{Flight, Journey};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One flight leg in the output.
#[derive(Debug, Serialize)]
pub struct FlightRecord {
    pub flight_no: String,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    pub base_price: f64,
    pub bag_price: u32,
    pub bags_allowed: u32,
}

impl From<&Flight> for FlightRecord {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_no: flight.flight_no().to_string(),
            origin: flight.origin().to_string(),
            destination: flight.destination().to_string(),
            departure: format_timestamp(flight.departure()),
            arrival: format_timestamp(flight.arrival()),
            base_price: flight.base_price(),
            bag_price: flight.bag_price(),
            bags_allowed: flight.bags_allowed(),
        }
    }
}

/// One journey in the output, with full per-leg flight data.
#[derive(Debug, Serialize)]
pub struct JourneyRecord {
    pub flights: Vec<FlightRecord>,
    pub origin: String,
    pub destination: String,
    pub bags_count: u32,
    pub bags_allowed: u32,
    pub total_price: f64,
    pub travel_time: String,
}

impl From<&Journey> for JourneyRecord {
    fn from(journey: &Journey) -> Self {
        Self {
            flights: journey.legs().iter().map(|f| f.as_ref().into()).collect(),
            origin: journey.origin().to_string(),
            destination: journey.destination().to_string(),
            bags_count: journey.bags_requested(),
            bags_allowed: journey.bags_allowed(),
            total_price: journey.total_price(),
            travel_time: format_travel_time(journey.travel_time()),
        }
    }
}

/// Render journeys as a pretty-printed JSON array.
pub fn render_journeys(journeys: &[Journey]) -> serde_json::Result<String> {
    let records: Vec<JourneyRecord> = journeys.iter().map(JourneyRecord::from).collect();
    serde_json::to_string_pretty(&records)
}

fn format_timestamp(t: NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// Format a travel time as `H:MM:SS` with unbounded hours.
fn format_travel_time(d: Duration) -> String {
    let total_seconds = d.num_seconds();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}
