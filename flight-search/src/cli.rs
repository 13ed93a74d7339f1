//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::IataCode;

/// Find flight combinations between two airports.
#[derive(Debug, Parser)]
#[command(name = "flight-search", version, about)]
pub struct Args {
    /// Path to the flight dataset (CSV).
    pub dataset: PathBuf,

    /// Origin airport code.
    pub origin: IataCode,

    /// Destination airport code.
    pub destination: IataCode,

    /// Number of bags to travel with.
    #[arg(short, long, default_value_t = 0)]
    pub bags: u32,

    /// Also search the way back and combine the results into round trips.
    #[arg(short = 'r', long = "return")]
    pub round_trip: bool,
}
