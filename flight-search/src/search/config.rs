//! Search configuration.

use chrono::Duration;

/// Whether the layover window's upper bound admits an exact 6-hour gap.
///
/// Outbound enumeration rejects a layover of exactly the maximum while
/// return enumeration accepts it; the inclusivity is selectable per
/// direction rather than hard-wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoverBound {
    /// Layover must be strictly below the maximum.
    Exclusive,
    /// Layover may equal the maximum.
    Inclusive,
}

impl LayoverBound {
    /// Check a layover against the window `[min, max]` / `[min, max)`.
    pub fn admits(self, layover: Duration, min: Duration, max: Duration) -> bool {
        if layover < min {
            return false;
        }
        match self {
            LayoverBound::Exclusive => layover < max,
            LayoverBound::Inclusive => layover <= max,
        }
    }
}

/// Configuration parameters for journey search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum layover between connecting flights (minutes).
    pub min_layover_mins: i64,

    /// Maximum layover between connecting flights (minutes).
    pub max_layover_mins: i64,

    /// Minimum ground time at the turnaround airport of a round trip
    /// (minutes). The composed pair must exceed this strictly.
    pub min_turnaround_mins: i64,

    /// Upper-bound inclusivity for outbound path enumeration.
    pub outbound_bound: LayoverBound,

    /// Upper-bound inclusivity for return path enumeration.
    pub return_bound: LayoverBound,
}

impl SearchConfig {
    /// Returns the minimum layover as a Duration.
    pub fn min_layover(&self) -> Duration {
        Duration::minutes(self.min_layover_mins)
    }

    /// Returns the maximum layover as a Duration.
    pub fn max_layover(&self) -> Duration {
        Duration::minutes(self.max_layover_mins)
    }

    /// Returns the minimum round-trip turnaround as a Duration.
    pub fn min_turnaround(&self) -> Duration {
        Duration::minutes(self.min_turnaround_mins)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_layover_mins: 60,
            max_layover_mins: 360, // 6 hours
            min_turnaround_mins: 60,
            outbound_bound: LayoverBound::Exclusive,
            return_bound: LayoverBound::Inclusive,
        }
    }
}
