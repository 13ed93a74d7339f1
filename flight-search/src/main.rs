use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use flight_search::cli::Args;
use flight_search::dataset;
use flight_search::output;
use flight_search::search::{self, RouteGraph, SearchConfig, SearchRequest};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let flights = dataset::load_flights(&args.dataset)?;
    let graph = RouteGraph::build(flights);

    let request = SearchRequest {
        origin: args.origin,
        destination: args.destination,
        bags: args.bags,
        round_trip: args.round_trip,
    };
    let journeys = search::search(&graph, &request, &SearchConfig::default());
    info!(journeys = journeys.len(), "search complete");

    println!("{}", output::render_journeys(&journeys)?);
    Ok(())
}
