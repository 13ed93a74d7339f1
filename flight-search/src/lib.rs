//! Flight journey search.
//!
//! Answers: "which combinations of flights get me from A to B, with my
//! bags, and what do they cost?" The search enumerates every simple
//! flight path satisfying the layover and baggage constraints, optionally
//! composes round trips, and prices the results.

pub mod cli;
pub mod dataset;
pub mod domain;
pub mod output;
pub mod search;
