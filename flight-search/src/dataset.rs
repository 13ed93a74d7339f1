//! CSV dataset ingestion.
//!
//! Reads the flight dataset and coerces it into validated domain records.
//! Numeric fields and timestamps are typed at deserialize time; domain
//! invariants (airport codes, arrival after departure) are checked when
//! each row is converted into a [`Flight`].

use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::info;

use crate::domain::{DomainError, Flight, InvalidIata};

/// Error from dataset loading.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be read or a row could not be deserialized
    #[error("failed to read dataset: {0}")]
    Read(#[from] csv::Error),

    /// A row deserialized but violates a domain invariant
    #[error("invalid flight {flight_no}: {message}")]
    InvalidRecord { flight_no: String, message: String },
}

/// One row of the dataset, exactly as the CSV carries it.
#[derive(Debug, Deserialize)]
struct FlightRow {
    flight_no: String,
    origin: String,
    destination: String,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    base_price: f64,
    bag_price: u32,
    bags_allowed: u32,
}

impl FlightRow {
    fn into_flight(self) -> Result<Flight, DatasetError> {
        let invalid = |flight_no: &str, message: String| DatasetError::InvalidRecord {
            flight_no: flight_no.to_string(),
            message,
        };

        let origin = self
            .origin
            .parse()
            .map_err(|e: InvalidIata| invalid(&self.flight_no, format!("origin: {e}")))?;
        let destination = self
            .destination
            .parse()
            .map_err(|e: InvalidIata| invalid(&self.flight_no, format!("destination: {e}")))?;

        let flight_no = self.flight_no;
        Flight::new(
            flight_no.clone(),
            origin,
            destination,
            self.departure,
            self.arrival,
            self.base_price,
            self.bag_price,
            self.bags_allowed,
        )
        .map_err(|e: DomainError| invalid(&flight_no, e.to_string()))
    }
}

/// Load and validate every flight in the CSV at `path`.
///
/// # Errors
///
/// Returns `Err` on I/O or CSV failure, or on the first row that fails
/// domain validation. A well-formed but empty dataset is not an error.
pub fn load_flights(path: &Path) -> Result<Vec<Flight>, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut flights = Vec::new();
    for row in reader.deserialize() {
        let row: FlightRow = row?;
        flights.push(row.into_flight()?);
    }

    info!(
        flights = flights.len(),
        path = %path.display(),
        "dataset loaded"
    );

    Ok(flights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "flight_no,origin,destination,departure,arrival,base_price,bag_price,bags_allowed";

    fn write_dataset(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        file
    }

    #[test]
    fn loads_valid_dataset() {
        let file = write_dataset(&[
            "ZH151,WIW,RFZ,2021-09-01T23:20:00,2021-09-02T03:50:00,168.0,12,2",
            "ZH152,RFZ,WIW,2021-09-02T05:50:00,2021-09-02T10:20:00,168.0,12,2",
        ]);

        let flights = load_flights(file.path()).unwrap();

        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0].flight_no(), "ZH151");
        assert_eq!(flights[0].origin().as_str(), "WIW");
        assert_eq!(flights[0].destination().as_str(), "RFZ");
        assert_eq!(flights[0].base_price(), 168.0);
        assert_eq!(flights[0].bag_price(), 12);
        assert_eq!(flights[0].bags_allowed(), 2);
    }

    #[test]
    fn empty_dataset_is_ok() {
        let file = write_dataset(&[]);
        let flights = load_flights(file.path()).unwrap();
        assert!(flights.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_flights(Path::new("/nonexistent/flights.csv"));
        assert!(matches!(result, Err(DatasetError::Read(_))));
    }

    #[test]
    fn unparseable_number_is_an_error() {
        let file = write_dataset(&[
            "ZH151,WIW,RFZ,2021-09-01T23:20:00,2021-09-02T03:50:00,not-a-price,12,2",
        ]);

        let result = load_flights(file.path());
        assert!(matches!(result, Err(DatasetError::Read(_))));
    }

    #[test]
    fn unparseable_timestamp_is_an_error() {
        let file = write_dataset(&[
            "ZH151,WIW,RFZ,yesterday,2021-09-02T03:50:00,168.0,12,2",
        ]);

        let result = load_flights(file.path());
        assert!(matches!(result, Err(DatasetError::Read(_))));
    }

    #[test]
    fn invalid_airport_code_is_an_error() {
        let file = write_dataset(&[
            "ZH151,wiw,RFZ,2021-09-01T23:20:00,2021-09-02T03:50:00,168.0,12,2",
        ]);

        let result = load_flights(file.path());
        match result {
            Err(DatasetError::InvalidRecord { flight_no, .. }) => {
                assert_eq!(flight_no, "ZH151");
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn arrival_before_departure_is_an_error() {
        let file = write_dataset(&[
            "ZH151,WIW,RFZ,2021-09-02T03:50:00,2021-09-01T23:20:00,168.0,12,2",
        ]);

        let result = load_flights(file.path());
        assert!(matches!(result, Err(DatasetError::InvalidRecord { .. })));
    }
}
