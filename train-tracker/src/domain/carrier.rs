//! Railway operators with their own legacy lookup endpoints.

use std::fmt;

use chrono_tz::Tz;
use encoding_rs::Encoding;

/// A carrier code, e.g. `hzpp`.
///
/// Codes are lowercase ASCII letters and digits. They form the first half of
/// cache keys (`hzpp:203`) and a URL path segment, so the delimiter `:` can
/// never appear in one.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarrierCode(&'static str);

impl CarrierCode {
    /// Create a carrier code.
    ///
    /// # Panics
    ///
    /// Panics if `code` is empty or contains anything other than lowercase
    /// ASCII letters and digits. Carrier codes are compiled in, so this is
    /// evaluated at compile time when used in a `const`.
    pub const fn new(code: &'static str) -> Self {
        let bytes = code.as_bytes();
        assert!(!bytes.is_empty(), "carrier code must not be empty");
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            assert!(
                b.is_ascii_lowercase() || b.is_ascii_digit(),
                "carrier code must be lowercase ASCII letters and digits"
            );
            i += 1;
        }
        CarrierCode(code)
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CarrierCode({})", self.0)
    }
}

impl fmt::Display for CarrierCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A railway operator.
///
/// Each carrier publishes its data in a fixed time zone and serves its pages
/// in a fixed legacy encoding. Both are properties of the carrier, not of the
/// machine doing the lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    code: CarrierCode,
    name: &'static str,
    homepage: &'static str,
    time_zone: Tz,
    encoding: &'static Encoding,
}

impl Carrier {
    /// Create a new carrier definition.
    pub fn new(
        code: CarrierCode,
        name: &'static str,
        homepage: &'static str,
        time_zone: Tz,
        encoding: &'static Encoding,
    ) -> Self {
        Self {
            code,
            name,
            homepage,
            time_zone,
            encoding,
        }
    }

    pub fn code(&self) -> CarrierCode {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn homepage(&self) -> &'static str {
        self.homepage
    }

    /// The time zone in which the carrier's timetable is expressed.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// The text encoding of the carrier's HTML pages.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

/// Code of the Croatian infrastructure manager.
pub const HZPP: CarrierCode = CarrierCode::new("hzpp");

/// HŽ Infrastruktura: Croatian railways, `Europe/Zagreb`, `windows-1250`.
pub fn hzpp() -> Carrier {
    Carrier::new(
        HZPP,
        "HŽ Infrastruktura",
        "http://www.hzinfra.hr/",
        chrono_tz::Europe::Zagreb,
        encoding_rs::WINDOWS_1250,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hzpp_definition() {
        let carrier = hzpp();
        assert_eq!(carrier.code().as_str(), "hzpp");
        assert_eq!(carrier.time_zone(), chrono_tz::Europe::Zagreb);
        assert_eq!(carrier.encoding().name(), "windows-1250");
    }

    #[test]
    fn code_display() {
        assert_eq!(format!("{}", HZPP), "hzpp");
        assert_eq!(format!("{:?}", HZPP), "CarrierCode(hzpp)");
    }

    #[test]
    fn code_never_contains_delimiter() {
        assert!(!hzpp().code().as_str().contains(':'));
    }

    #[test]
    #[should_panic(expected = "lowercase")]
    fn reject_uppercase_code() {
        let _ = CarrierCode::new("HZPP");
    }

    #[test]
    #[should_panic(expected = "lowercase")]
    fn reject_delimiter_in_code() {
        let _ = CarrierCode::new("hz:pp");
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn reject_empty_code() {
        let _ = CarrierCode::new("");
    }

    #[test]
    fn equality() {
        assert_eq!(hzpp(), hzpp());
        assert_eq!(CarrierCode::new("hzpp"), HZPP);
        assert_ne!(CarrierCode::new("hr"), HZPP);
    }
}
