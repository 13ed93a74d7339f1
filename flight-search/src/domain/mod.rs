//! Domain types for the flight journey search.
//!
//! This module contains the core data model. All types enforce their
//! invariants at construction time, so code that receives these types can
//! trust their validity.

mod airport;
mod error;
mod flight;
mod journey;

pub use airport::{IataCode, InvalidIata};
pub use error::DomainError;
pub use flight::Flight;
pub use journey::Journey;
