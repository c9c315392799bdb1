use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ParseError;

/// A 48-bit MAC address, stored as 12 lower-case hex digits.
///
/// The modem prints these as `0011-22AA-BBCC`; parsing also accepts colon,
/// dot or bare forms. Displays and serializes in colon form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(String);

impl MacAddress {
    /// Dot-grouped by four, e.g. `0011.22aa.bbcc`.
    pub fn dotted(&self) -> String {
        self.groups(4).join(".")
    }

    /// Colon-grouped by two, e.g. `00:11:22:aa:bb:cc`.
    pub fn colon(&self) -> String {
        self.groups(2).join(":")
    }

    /// Bare hex digits, e.g. `001122aabbcc`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn groups(&self, width: usize) -> Vec<&str> {
        // Only ASCII hex is ever stored, so byte offsets are char offsets.
        (0..self.0.len())
            .step_by(width)
            .map(|i| &self.0[i..i + width])
            .collect()
    }
}

impl FromStr for MacAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | ':' | '.'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        if normalized.len() != 12 || !normalized.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseError::new("MAC address of 12 hex digits", s));
        }
        Ok(Self(normalized))
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.colon())
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn dashed_input_renders_both_forms() {
        let mac: MacAddress = "1122-3344-5566".parse().unwrap();
        assert_eq!(mac.dotted(), "1122.3344.5566");
        assert_eq!(mac.colon(), "11:22:33:44:55:66");
        assert_eq!(mac.as_str(), "112233445566");
    }

    #[test]
    fn input_is_lower_cased() {
        let mac: MacAddress = "00A0-C9FF-EE01".parse().unwrap();
        assert_eq!(mac.to_string(), "00:a0:c9:ff:ee:01");
    }

    #[test]
    fn other_separators_normalize_to_the_same_value() {
        let a: MacAddress = "00:a0:c9:ff:ee:01".parse().unwrap();
        let b: MacAddress = "00a0.c9ff.ee01".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn wrong_length_or_non_hex_is_rejected() {
        assert!("1122-3344-55".parse::<MacAddress>().is_err());
        assert!("1122-3344-5566-77".parse::<MacAddress>().is_err());
        assert!("1122-3344-55zz".parse::<MacAddress>().is_err());
        assert!("".parse::<MacAddress>().is_err());
    }

    #[test]
    fn serializes_as_colon_form() {
        let mac: MacAddress = "1122-3344-5566".parse().unwrap();
        assert_eq!(
            serde_json::to_string(&mac).unwrap(),
            "\"11:22:33:44:55:66\""
        );
    }
}
