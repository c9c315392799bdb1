// ── Cell text coercion ──
//
// Strict conversions from raw cell text to typed values. The pages are
// machine generated, so anything that doesn't parse is an error rather
// than something to guess around.

use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::error::ParseError;
use crate::model::MacAddress;

// 12 days 0h:33m:10s
static UPTIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) days (\d+)h:(\d+)m:(\d+)s").expect("valid uptime regex"));

/// Drop a trailing unit: `"550000000 Hz"` → `"550000000"`.
///
/// Splits on the first whitespace (the pages pad cells with `&nbsp;`) and
/// keeps the left token; text without any comes back trimmed.
pub fn strip_unit(raw: &str) -> &str {
    let raw = raw.trim();
    raw.split_once(char::is_whitespace)
        .map_or(raw, |(value, _)| value)
}

/// Parse an integer cell, ignoring a trailing unit.
pub fn to_int<T: FromStr>(raw: &str) -> Result<T, ParseError> {
    strip_unit(raw)
        .parse()
        .map_err(|_| ParseError::new("integer", raw))
}

/// Parse a floating point cell, ignoring a trailing unit.
pub fn to_float(raw: &str) -> Result<f64, ParseError> {
    strip_unit(raw)
        .parse()
        .map_err(|_| ParseError::new("number", raw))
}

/// Parse the modem's uptime string, e.g. `"12 days 0h:33m:10s"`.
pub fn to_duration(raw: &str) -> Result<Duration, ParseError> {
    let err = || ParseError::new("uptime like '12 days 0h:33m:10s'", raw);
    let caps = UPTIME_RE.captures(raw).ok_or_else(err)?;

    let mut parts = [0u64; 4];
    for (slot, group) in parts.iter_mut().zip(caps.iter().skip(1)) {
        let group = group.ok_or_else(err)?;
        *slot = group.as_str().parse().map_err(|_| err())?;
    }
    let [days, hours, minutes, seconds] = parts;

    let secs = days
        .checked_mul(86_400)
        .and_then(|d| d.checked_add(hours.checked_mul(3_600)?))
        .and_then(|s| s.checked_add(minutes.checked_mul(60)?))
        .and_then(|s| s.checked_add(seconds))
        .ok_or_else(err)?;
    Ok(Duration::from_secs(secs))
}

/// Parse a MAC address cell such as `"0011-22AA-BBCC"`.
pub fn to_mac(raw: &str) -> Result<MacAddress, ParseError> {
    raw.parse()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn strip_unit_keeps_left_token() {
        assert_eq!(strip_unit("550000000 Hz"), "550000000");
        assert_eq!(strip_unit("40 dBmV"), "40");
        assert_eq!(strip_unit("5.120 Msym/sec"), "5.120");
        assert_eq!(strip_unit(" 3 "), "3");
        assert_eq!(strip_unit("37\u{a0}dB"), "37");
        assert_eq!(strip_unit("QAM256"), "QAM256");
    }

    #[test]
    fn ints_and_floats_with_units() {
        assert_eq!(to_int::<u64>("550000000 Hz").unwrap(), 550_000_000);
        assert_eq!(to_int::<i32>("-3 dBmV").unwrap(), -3);
        assert_eq!(to_float("5.120 Msym/sec").unwrap(), 5.12);
    }

    #[test]
    fn non_numeric_text_fails() {
        let err = to_int::<u32>("n/a").unwrap_err();
        assert_eq!(err.expected, "integer");
        assert_eq!(err.value, "n/a");

        assert!(to_int::<u32>("").is_err());
        assert!(to_float("fast Msym/sec").is_err());
    }

    #[test]
    fn uptime_parses_to_total_seconds() {
        let d = to_duration("12 days 0h:33m:10s").unwrap();
        assert_eq!(d, Duration::from_secs(12 * 86_400 + 33 * 60 + 10));
        assert_eq!(d.as_secs(), 1_038_790);
    }

    #[test]
    fn uptime_tolerates_surrounding_text() {
        let d = to_duration("System up 0 days 1h:00m:01s ago").unwrap();
        assert_eq!(d.as_secs(), 3_601);
    }

    #[test]
    fn uptime_requires_all_four_groups() {
        assert!(to_duration("0h:33m:10s").is_err());
        assert!(to_duration("12 days").is_err());
        assert!(to_duration("").is_err());
    }

    #[test]
    fn mac_via_coercer() {
        let mac = to_mac("1122-3344-5566").unwrap();
        assert_eq!(mac.dotted(), "1122.3344.5566");
        assert_eq!(mac.colon(), "11:22:33:44:55:66");
    }
}
