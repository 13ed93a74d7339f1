//! Round-trip composition.
//!
//! Joins independently enumerated outbound and return path sets into
//! complete round trips, subject to a minimum ground time at the
//! turnaround airport.

use std::sync::Arc;

use chrono::Duration;
use tracing::debug;

use crate::domain::Flight;

/// Cross-join outbound and return paths.
///
/// Every (outbound, return) pair whose ground time — the return path's
/// first departure minus the outbound path's last arrival — strictly
/// exceeds `min_turnaround` yields one concatenated path. Pairs at or
/// below the minimum are rejected; if either side is empty there are no
/// partial trips.
pub(super) fn cross_join(
    outbound: &[Vec<Arc<Flight>>],
    inbound: &[Vec<Arc<Flight>>],
    min_turnaround: Duration,
) -> Vec<Vec<Arc<Flight>>> {
    let mut composed = Vec::new();

    for out in outbound {
        for back in inbound {
            // Safe: the enumerator never yields empty paths
            let turnaround = out.last().unwrap().layover_to(back.first().unwrap());
            if turnaround <= min_turnaround {
                continue;
            }

            let mut legs = out.clone();
            legs.extend(back.iter().cloned());
            composed.push(legs);
        }
    }

    debug!(
        outbound = outbound.len(),
        inbound = inbound.len(),
        composed = composed.len(),
        "round-trip composition complete"
    );

    composed
}
