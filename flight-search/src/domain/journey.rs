//! Journey type.
//!
//! A `Journey` is the priced, immutable summary of one enumerated flight
//! path (or an outbound and return path joined end to end). It is built
//! once per accepted path at output time and never mutated afterwards.

use std::sync::Arc;

use chrono::Duration;

use super::{DomainError, Flight, IataCode};

/// A complete priced trip.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (arrival airport = next departure airport)
#[derive(Debug, Clone)]
pub struct Journey {
    legs: Vec<Arc<Flight>>,
    bags_requested: u32,
    bags_allowed: u32,
    total_price: f64,
    travel_time: Duration,
}

impl Journey {
    /// Price a flight path into a journey.
    ///
    /// The total is the sum of base prices plus `bags_requested` times the
    /// sum of per-bag prices; the journey's bag allowance is the smallest
    /// allowance across its legs; travel time runs from the first
    /// departure to the last arrival.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `legs` is empty or if consecutive legs don't share
    /// an airport.
    pub fn price(legs: Vec<Arc<Flight>>, bags_requested: u32) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyJourney);
        }

        for window in legs.windows(2) {
            let prev_dest = window[0].destination();
            let next_origin = window[1].origin();
            if prev_dest != next_origin {
                return Err(DomainError::LegsNotConnected(prev_dest, next_origin));
            }
        }

        let base: f64 = legs.iter().map(|f| f.base_price()).sum();
        let per_bag: u32 = legs.iter().map(|f| f.bag_price()).sum();
        let total_price = base + f64::from(bags_requested * per_bag);

        // Safe: non-empty checked above
        let bags_allowed = legs.iter().map(|f| f.bags_allowed()).min().unwrap();
        let travel_time = legs
            .last()
            .unwrap()
            .arrival()
            .signed_duration_since(legs.first().unwrap().departure());

        Ok(Journey {
            legs,
            bags_requested,
            bags_allowed,
            total_price,
            travel_time,
        })
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[Arc<Flight>] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the origin airport.
    pub fn origin(&self) -> IataCode {
        // Safe: validated non-empty at construction
        self.legs.first().unwrap().origin()
    }

    /// Returns the final destination airport.
    pub fn destination(&self) -> IataCode {
        // Safe: validated non-empty at construction
        self.legs.last().unwrap().destination()
    }

    /// Returns how many bags the passenger asked to travel with.
    pub fn bags_requested(&self) -> u32 {
        self.bags_requested
    }

    /// Returns the smallest bag allowance across all legs.
    pub fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    /// Returns the total price including baggage.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Returns the time from first departure to last arrival.
    pub fn travel_time(&self) -> Duration {
        self.travel_time
    }
}
