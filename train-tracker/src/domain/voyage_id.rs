//! Carrier-assigned voyage identifier.

use std::fmt;

/// Maximum length of a voyage identifier.
const MAX_LEN: usize = 16;

/// Error returned when parsing an invalid voyage identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid voyage ID: {reason}")]
pub struct InvalidVoyageId {
    reason: &'static str,
}

/// A voyage identifier as assigned by the carrier (usually the train number).
///
/// Voyage IDs are embedded verbatim into upstream request URLs and into cache
/// keys, so only ASCII letters and digits are accepted. Anything that would
/// need URL escaping, or could collide with the `:` cache-key delimiter, is
/// rejected at construction.
///
/// # Examples
///
/// ```
/// use train_tracker::domain::VoyageId;
///
/// let id = VoyageId::parse("203").unwrap();
/// assert_eq!(id.as_str(), "203");
///
/// assert!(VoyageId::parse("").is_err());
/// assert!(VoyageId::parse("20 3").is_err());
/// assert!(VoyageId::parse("hzpp:203").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VoyageId(String);

impl VoyageId {
    /// Parse a voyage ID. Surrounding whitespace is trimmed.
    pub fn parse(s: &str) -> Result<Self, InvalidVoyageId> {
        let s = s.trim();

        if s.is_empty() {
            return Err(InvalidVoyageId {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LEN {
            return Err(InvalidVoyageId {
                reason: "must be at most 16 characters",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidVoyageId {
                reason: "must contain only ASCII letters and digits",
            });
        }

        Ok(VoyageId(s.to_string()))
    }

    /// Returns the voyage ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VoyageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VoyageId({})", self.0)
    }
}

impl fmt::Display for VoyageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(VoyageId::parse("203").is_ok());
        assert!(VoyageId::parse("1").is_ok());
        assert!(VoyageId::parse("IC541").is_ok());
        assert!(VoyageId::parse("ec158").is_ok());
        assert!(VoyageId::parse("1234567890123456").is_ok());
    }

    #[test]
    fn trims_whitespace() {
        let id = VoyageId::parse("  203 ").unwrap();
        assert_eq!(id.as_str(), "203");
    }

    #[test]
    fn reject_empty() {
        assert!(VoyageId::parse("").is_err());
        assert!(VoyageId::parse("   ").is_err());
    }

    #[test]
    fn reject_too_long() {
        assert!(VoyageId::parse("12345678901234567").is_err());
    }

    #[test]
    fn reject_url_and_key_metacharacters() {
        assert!(VoyageId::parse("hzpp:203").is_err());
        assert!(VoyageId::parse("203&x=1").is_err());
        assert!(VoyageId::parse("20 3").is_err());
        assert!(VoyageId::parse("203/").is_err());
        assert!(VoyageId::parse("20%33").is_err());
        assert!(VoyageId::parse("Čakovec").is_err());
    }

    #[test]
    fn display() {
        let id = VoyageId::parse("541").unwrap();
        assert_eq!(format!("{}", id), "541");
    }

    #[test]
    fn debug() {
        let id = VoyageId::parse("541").unwrap();
        assert_eq!(format!("{:?}", id), "VoyageId(541)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(VoyageId::parse("203").unwrap());
        assert!(set.contains(&VoyageId::parse(" 203").unwrap()));
        assert!(!set.contains(&VoyageId::parse("204").unwrap()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Za-z0-9]{1,16}") {
            let id = VoyageId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// The cache-key delimiter is always rejected
        #[test]
        fn delimiter_rejected(a in "[A-Za-z0-9]{0,7}", b in "[A-Za-z0-9]{0,7}") {
            let s = format!("{a}:{b}");
            prop_assert!(VoyageId::parse(&s).is_err());
        }

        /// A parsed ID never needs URL escaping
        #[test]
        fn parsed_ids_are_url_safe(s in ".{1,20}") {
            if let Ok(id) = VoyageId::parse(&s) {
                prop_assert!(id.as_str().bytes().all(|b| b.is_ascii_alphanumeric()));
            }
        }
    }
}
