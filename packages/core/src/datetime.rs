//! Tolerant parser for HL7 timestamp strings.
//!
//! The grammar is `YYYYMMDDHHMMSS.UUUU[+-ZZzz|Z]`, where digits can be
//! omitted from the right to express less precision. Vendor feeds are
//! not consistent about zero-padding or suffixes, so parsing is
//! regex-first with a fixed-width slice fallback, and every malformation
//! is absorbed into "no value" rather than an error: many real documents
//! carry structured date ranges (or garbage) where a flat timestamp is
//! expected, and callers handle absence explicitly.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use regex::Regex;
use serde::{Serialize, Serializer};

/// Years before this are treated as no information. Real-world feeds
/// emit fields like `000101` that must not be read as a date.
const MIN_YEAR: i32 = 1800;

/// Tolerant timestamp pattern: date, then optional hour, minute, second,
/// fractional seconds (captured but discarded) and timezone suffix.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TIMESTAMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})(\d{2})(\d{2})(\d{2})?(\d{2})?(\d{2})?(\.\d+)?([+-]\d{4}|Z)?")
        .expect("valid regex")
});

/// A parsed HL7 timestamp at whatever precision the input carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTimestamp {
    /// Date-only precision (year, month, day).
    Date(NaiveDate),

    /// Date and time with an explicit UTC offset. A missing or `Z`
    /// suffix is offset zero.
    Instant(DateTime<FixedOffset>),
}

impl Serialize for ParsedTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Date(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
            Self::Instant(instant) => serializer.serialize_str(&instant.to_rfc3339()),
        }
    }
}

/// Parse an HL7 timestamp string.
///
/// Returns `None` - never an error - for anything that does not carry a
/// recognizable year-first date:
///
/// - fewer than 4 characters (`"08"`)
/// - a leading 4-character substring that is not an integer (`"-08"`)
/// - a year before 1800 (`"000101"`, which is *not* January 1901)
/// - calendar components out of range (month 13)
///
/// # Examples
/// ```
/// use ccdex_core::parse_timestamp;
/// use ccdex_core::ParsedTimestamp;
/// use chrono::NaiveDate;
///
/// // 4 digits is January 1 of that year
/// assert_eq!(
///     parse_timestamp("1954"),
///     NaiveDate::from_ymd_opt(1954, 1, 1).map(ParsedTimestamp::Date)
/// );
/// // fractional seconds are parsed but not kept
/// let ts = parse_timestamp("20101028092016.829-0500").unwrap();
/// let ParsedTimestamp::Instant(instant) = ts else { panic!("expected instant") };
/// assert_eq!(instant.offset().local_minus_utc(), -300 * 60);
///
/// assert_eq!(parse_timestamp("000101"), None);
/// ```
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<ParsedTimestamp> {
    let year: i32 = value.get(..4)?.parse().ok()?;
    if year < MIN_YEAR {
        return None;
    }

    // ex. value="1999" translates to 1 Jan 1999
    if value.len() == 4 {
        return NaiveDate::from_ymd_opt(year, 1, 1).map(ParsedTimestamp::Date);
    }

    // Slices are clamped to the input: feeds truncate mid-field.
    let month: u32 = clamped(value, 4, 6).parse().ok()?;
    let day: u32 = match clamped(value, 6, 8) {
        "" => 1,
        s => s.parse().ok()?,
    };

    // Time information requires at least hours and minutes after the date.
    if value.len() >= 12 {
        if let Some(instant) = parse_instant(value) {
            return Some(instant);
        }
    }

    NaiveDate::from_ymd_opt(year, month, day).map(ParsedTimestamp::Date)
}

/// Parse a date-plus-time string into an instant.
///
/// Regex first; fixed-width slicing when ragged padding defeats the
/// pattern. Returns `None` when the time portion is unusable, in which
/// case the caller degrades to date precision.
fn parse_instant(value: &str) -> Option<ParsedTimestamp> {
    let (year, month, day, hour, minute, second, zone) =
        if let Some(caps) = TIMESTAMP_PATTERN.captures(value) {
            (
                caps.get(1)?.as_str().parse().ok()?,
                caps.get(2)?.as_str().parse().ok()?,
                caps.get(3)?.as_str().parse().ok()?,
                // A match without hour+minute is date-only input wearing
                // a long suffix; let the caller keep the date.
                caps.get(4)?.as_str().parse().ok()?,
                caps.get(5)?.as_str().parse().ok()?,
                match caps.get(6) {
                    Some(secs) => secs.as_str().parse().ok()?,
                    None => 0,
                },
                // group 7, fractional seconds, is discarded
                caps.get(8).map(|tz| tz.as_str()).unwrap_or_default(),
            )
        } else {
            (
                value.get(..4)?.parse().ok()?,
                value.get(4..6)?.parse().ok()?,
                value.get(6..8)?.parse().ok()?,
                value.get(8..10)?.parse().ok()?,
                value.get(10..12)?.parse().ok()?,
                match clamped(value, 12, 14) {
                    "" => 0,
                    s => s.parse().ok()?,
                },
                value.get(14..).unwrap_or_default(),
            )
        };

    let offset = parse_offset(zone)?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second)?;
    date.and_time(time)
        .and_local_timezone(offset)
        .single()
        .map(ParsedTimestamp::Instant)
}

/// Parse a `[+-]ZZzz` or `Z` timezone suffix into a fixed offset.
///
/// Empty and `Z` both mean UTC. Offsets are whole minutes east of UTC,
/// signed.
fn parse_offset(zone: &str) -> Option<FixedOffset> {
    if zone.is_empty() || zone == "Z" {
        return FixedOffset::east_opt(0);
    }
    if zone.len() != 5 {
        return None;
    }
    let sign = match zone.get(..1)? {
        "+" => 1,
        "-" => -1,
        _ => return None,
    };
    let hours: i32 = zone.get(1..3)?.parse().ok()?;
    let minutes: i32 = zone.get(3..5)?.parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 60 + minutes) * 60)
}

/// Slice `value[start..end]`, clamping `end` to the input length.
fn clamped(value: &str, start: usize, end: usize) -> &str {
    value.get(start..end.min(value.len())).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> Option<ParsedTimestamp> {
        NaiveDate::from_ymd_opt(y, m, d).map(ParsedTimestamp::Date)
    }

    fn instant(
        y: i32,
        mo: u32,
        d: u32,
        h: u32,
        mi: u32,
        s: u32,
        offset_minutes: i32,
    ) -> Option<ParsedTimestamp> {
        let offset = FixedOffset::east_opt(offset_minutes * 60)?;
        NaiveDate::from_ymd_opt(y, mo, d)?
            .and_hms_opt(h, mi, s)?
            .and_local_timezone(offset)
            .single()
            .map(ParsedTimestamp::Instant)
    }

    #[test]
    fn test_year_only_is_january_first() {
        assert_eq!(parse_timestamp("1954"), date(1954, 1, 1));
        assert_eq!(parse_timestamp("1800"), date(1800, 1, 1));
    }

    #[test]
    fn test_year_month() {
        assert_eq!(parse_timestamp("198708"), date(1987, 8, 1));
    }

    #[test]
    fn test_full_date() {
        assert_eq!(parse_timestamp("20101028"), date(2010, 10, 28));
    }

    #[test]
    fn test_instant_with_fractional_seconds_and_offset() {
        // fractional seconds are captured and discarded
        assert_eq!(
            parse_timestamp("20101028092016.829-0500"),
            instant(2010, 10, 28, 9, 20, 16, -300)
        );
        assert_eq!(
            parse_timestamp("20101026091700.000-0500"),
            instant(2010, 10, 26, 9, 17, 0, -300)
        );
    }

    #[test]
    fn test_instant_without_timezone_is_utc() {
        assert_eq!(
            parse_timestamp("19630617120000"),
            instant(1963, 6, 17, 12, 0, 0, 0)
        );
    }

    #[test]
    fn test_instant_without_seconds() {
        assert_eq!(
            parse_timestamp("201308221815"),
            instant(2013, 8, 22, 18, 15, 0, 0)
        );
    }

    #[test]
    fn test_instant_minute_precision_with_offset() {
        assert_eq!(
            parse_timestamp("201312010800-0800"),
            instant(2013, 12, 1, 8, 0, 0, -480)
        );
    }

    #[test]
    fn test_zulu_suffix_is_utc() {
        assert_eq!(
            parse_timestamp("20130822181500Z"),
            instant(2013, 8, 22, 18, 15, 0, 0)
        );
    }

    #[test]
    fn test_too_short_is_no_value() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("08"), None);
        assert_eq!(parse_timestamp("-08"), None);
    }

    #[test]
    fn test_pre_1800_year_is_no_value() {
        // '000101' is parsed to 1901-01-01 by lenient JS Date handling;
        // here it is no information
        assert_eq!(parse_timestamp("000101"), None);
        assert_eq!(parse_timestamp("1799"), None);
    }

    #[test]
    fn test_non_numeric_year_is_no_value() {
        assert_eq!(parse_timestamp("abcd0101"), None);
        assert_eq!(parse_timestamp("+2001"), None);
    }

    #[test]
    fn test_out_of_range_calendar_is_no_value() {
        assert_eq!(parse_timestamp("20101328"), None); // month 13
        assert_eq!(parse_timestamp("20100232"), None); // day 32
    }

    #[test]
    fn test_date_plus_partial_time_is_date_only() {
        // 8-11 characters: too short for hour+minute
        assert_eq!(parse_timestamp("2010102809"), date(2010, 10, 28));
    }

    #[test]
    fn test_unusable_time_degrades_to_date() {
        // long enough to claim time precision, but the time is garbage
        assert_eq!(parse_timestamp("20101028xx0000"), date(2010, 10, 28));
    }

    #[test]
    fn test_truncated_offset_suffix_ignored() {
        // "-05" is not a usable zone; the time stands and the suffix is
        // dropped, matching the pattern's optional-zone behavior
        assert_eq!(
            parse_timestamp("201010280920-05"),
            instant(2010, 10, 28, 9, 20, 0, 0)
        );
    }

    #[test]
    fn test_serialize_date() {
        let ts = parse_timestamp("1954").expect("valid");
        assert_eq!(
            serde_json::to_string(&ts).expect("serializes"),
            "\"1954-01-01\""
        );
    }

    #[test]
    fn test_serialize_instant_keeps_offset() {
        let ts = parse_timestamp("20101028092016.829-0500").expect("valid");
        assert_eq!(
            serde_json::to_string(&ts).expect("serializes"),
            "\"2010-10-28T09:20:16-05:00\""
        );
    }
}
