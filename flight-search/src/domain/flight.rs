//! Flight record type.
//!
//! A `Flight` is a single leg from the dataset: one scheduled departure
//! with its pricing and baggage terms. Values are validated once at
//! construction so the search can trust every record it touches.

use chrono::{Duration, NaiveDateTime};

use super::{DomainError, IataCode};

/// A validated flight leg.
///
/// Immutable after construction. The search shares flights between paths
/// via `Arc<Flight>`, so nothing here is ever mutated in place.
///
/// # Invariants
///
/// - `arrival > departure`
/// - `base_price` is finite and non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    flight_no: String,
    origin: IataCode,
    destination: IataCode,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    base_price: f64,
    bag_price: u32,
    bags_allowed: u32,
}

impl Flight {
    /// Construct a flight, validating the schedule and price invariants.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `arrival <= departure`, or if `base_price` is
    /// negative or not finite.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_no: String,
        origin: IataCode,
        destination: IataCode,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        base_price: f64,
        bag_price: u32,
        bags_allowed: u32,
    ) -> Result<Self, DomainError> {
        if arrival <= departure {
            return Err(DomainError::InvalidFlight(
                "arrival must be after departure",
            ));
        }

        if !base_price.is_finite() || base_price < 0.0 {
            return Err(DomainError::InvalidFlight(
                "base price must be a non-negative number",
            ));
        }

        Ok(Flight {
            flight_no,
            origin,
            destination,
            departure,
            arrival,
            base_price,
            bag_price,
            bags_allowed,
        })
    }

    /// Returns the flight number.
    pub fn flight_no(&self) -> &str {
        &self.flight_no
    }

    /// Returns the origin airport.
    pub fn origin(&self) -> IataCode {
        self.origin
    }

    /// Returns the destination airport.
    pub fn destination(&self) -> IataCode {
        self.destination
    }

    /// Returns the departure time.
    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    /// Returns the arrival time.
    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// Returns the ticket price without baggage.
    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Returns the price per checked bag.
    pub fn bag_price(&self) -> u32 {
        self.bag_price
    }

    /// Returns how many bags this flight can carry per passenger.
    pub fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    /// Returns the in-air duration (guaranteed positive).
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// Returns the ground time between this flight's arrival and the next
    /// flight's departure. Negative if `next` departs before we land.
    pub fn layover_to(&self, next: &Flight) -> Duration {
        next.departure.signed_duration_since(self.arrival)
    }
}
