//! Airport code type.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid IATA code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code: {reason}")]
pub struct InvalidIata {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA location codes are always 3 uppercase ASCII letters. This type
/// guarantees that any `IataCode` value is valid by construction, so the
/// search never has to re-check airport identifiers.
///
/// # Examples
///
/// ```
/// use flight_search::domain::IataCode;
///
/// let prg = IataCode::parse("PRG").unwrap();
/// assert_eq!(prg.as_str(), "PRG");
///
/// // Lowercase is rejected
/// assert!(IataCode::parse("prg").is_err());
///
/// // Wrong length is rejected
/// assert!(IataCode::parse("PR").is_err());
/// assert!(IataCode::parse("PRGX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IataCode([u8; 3]);

impl IataCode {
    /// Parse an IATA code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIata {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidIata {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(IataCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: only uppercase ASCII letters are ever stored
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl FromStr for IataCode {
    type Err = InvalidIata;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IataCode({})", self.as_str())
    }
}

impl fmt::Display for IataCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(IataCode::parse("PRG").is_ok());
        assert!(IataCode::parse("LHR").is_ok());
        assert!(IataCode::parse("JFK").is_ok());
        assert!(IataCode::parse("AAA").is_ok());
        assert!(IataCode::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(IataCode::parse("prg").is_err());
        assert!(IataCode::parse("Prg").is_err());
        assert!(IataCode::parse("PRg").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(IataCode::parse("").is_err());
        assert!(IataCode::parse("P").is_err());
        assert!(IataCode::parse("PR").is_err());
        assert!(IataCode::parse("PRGX").is_err());
        assert!(IataCode::parse("PRAGUE").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(IataCode::parse("P1G").is_err());
        assert!(IataCode::parse("P-G").is_err());
        assert!(IataCode::parse("P G").is_err());
        assert!(IataCode::parse("PŘG").is_err());
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: IataCode = "WIW".parse().unwrap();
        assert_eq!(parsed, IataCode::parse("WIW").unwrap());
        assert!("wiw".parse::<IataCode>().is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = IataCode::parse("RFZ").unwrap();
        assert_eq!(format!("{}", code), "RFZ");
        assert_eq!(format!("{:?}", code), "IataCode(RFZ)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(IataCode::parse("PRG").unwrap());
        assert!(set.contains(&IataCode::parse("PRG").unwrap()));
        assert!(!set.contains(&IataCode::parse("LHR").unwrap()));
    }
}
