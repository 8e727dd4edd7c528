//! Best-effort timestamp resolution for conversation records
//!
//! Exports disagree on where the creation time lives and how it is encoded, so
//! resolution happens in two steps:
//!
//! 1. [`raw_timestamp`] finds the candidate value by probing a fixed list of field
//!    names, first at the top level and then under `metadata`.
//! 2. [`parse_timestamp_value`] interprets that value as Unix seconds, Unix
//!    milliseconds, or one of several date string layouts.
//!
//! A record whose value is missing, falsy, or unparseable is "unresolved".

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Number, Value};

use crate::parsers::values::is_truthy;

/// Top-level fields probed for a timestamp, in priority order
pub const TOP_LEVEL_FIELDS: [&str; 7] =
    ["create_time", "created_at", "timestamp", "created", "date", "updated_at", "update_time"];

/// Fields probed under a nested `metadata` object
pub const METADATA_FIELDS: [&str; 5] = ["create_time", "created_at", "timestamp", "created", "date"];

/// Epoch numbers above this are read as milliseconds
const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

type StringParser = fn(&str) -> Option<DateTime<Utc>>;

/// String layouts tried in order; the first one that parses wins
const STRING_PARSERS: [StringParser; 6] = [
    parse_rfc3339,
    parse_iso_with_offset,
    parse_iso_naive,
    parse_iso_hour_only,
    parse_compact_date,
    parse_fixed_patterns,
];

const OFFSET_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

const FIXED_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const FIXED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Find the raw timestamp value of a record
///
/// The first top-level field that is *present* is taken, even when its value is
/// falsy. Only if that value is falsy (or no field exists) is `metadata` searched
/// the same way. A falsy end result, such as `0`, counts as no timestamp.
pub fn raw_timestamp(record: &Value) -> Option<&Value> {
    let top_level = first_present(record, &TOP_LEVEL_FIELDS);
    if let Some(value) = top_level
        && is_truthy(value)
    {
        return Some(value);
    }

    record
        .get("metadata")
        .filter(|m| m.is_object())
        .and_then(|metadata| first_present(metadata, &METADATA_FIELDS))
        .filter(|v| is_truthy(v))
}

fn first_present<'a>(record: &'a Value, fields: &[&str]) -> Option<&'a Value> {
    fields.iter().find_map(|field| record.get(*field))
}

/// Resolve a record's timestamp to a UTC instant, or `None` if unresolved
pub fn resolve_timestamp(record: &Value) -> Option<DateTime<Utc>> {
    raw_timestamp(record).and_then(parse_timestamp_value)
}

/// Interpret a raw timestamp value
///
/// Numbers are Unix epoch values (milliseconds when above 10^12, seconds otherwise).
/// Strings go through the layouts in [`STRING_PARSERS`]. Any other type is unresolved.
pub fn parse_timestamp_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => from_epoch_number(n),
        Value::String(s) => parse_timestamp_str(s),
        _ => None,
    }
}

fn from_epoch_number(n: &Number) -> Option<DateTime<Utc>> {
    if let Some(whole) = n.as_i64() {
        return if whole > MILLIS_THRESHOLD {
            DateTime::from_timestamp_millis(whole)
        } else {
            DateTime::from_timestamp(whole, 0)
        };
    }

    let value = n.as_f64()?;
    let seconds = if value > MILLIS_THRESHOLD as f64 { value / 1000.0 } else { value };
    from_fractional_seconds(seconds)
}

fn from_fractional_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }

    let whole = seconds.floor();
    let nanos = ((seconds - whole) * NANOS_PER_SECOND).round() as u32;
    // Rounding can carry a full second
    if nanos >= NANOS_PER_SECOND as u32 {
        DateTime::from_timestamp((whole as i64).checked_add(1)?, 0)
    } else {
        DateTime::from_timestamp(whole as i64, nanos)
    }
}

/// Parse a date string, trying each layout in [`STRING_PARSERS`] in order
pub fn parse_timestamp_str(text: &str) -> Option<DateTime<Utc>> {
    STRING_PARSERS.iter().find_map(|parse| parse(text))
}

/// Rewrite a trailing `Z` designator as an explicit `+00:00` offset
fn with_explicit_utc(text: &str) -> Cow<'_, str> {
    match text.strip_suffix('Z') {
        Some(rest) => Cow::Owned(format!("{}+00:00", rest)),
        None => Cow::Borrowed(text),
    }
}

fn parse_rfc3339(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&with_explicit_utc(text)).ok().map(|dt| dt.with_timezone(&Utc))
}

fn parse_iso_with_offset(text: &str) -> Option<DateTime<Utc>> {
    let text = with_explicit_utc(text);
    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&text, fmt).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_iso_naive(text: &str) -> Option<DateTime<Utc>> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `2024-01-15T10`, optionally followed by `Z` or an offset
///
/// chrono needs minutes to build a time, so the hour is expanded to `HH:00` and the
/// result goes back through the regular ISO layouts.
fn parse_iso_hour_only(text: &str) -> Option<DateTime<Utc>> {
    let (date, rest) = NaiveDate::parse_and_remainder(text, ISO_DATE_FORMAT).ok()?;
    let (hour, offset) = rest.strip_prefix(['T', ' '])?.split_at_checked(2)?;
    if !hour.bytes().all(|b| b.is_ascii_digit()) || offset.starts_with(':') {
        return None;
    }

    let expanded = format!("{}T{}:00{}", date.format(ISO_DATE_FORMAT), hour, offset);
    parse_iso_with_offset(&expanded).or_else(|| parse_iso_naive(&expanded))
}

fn parse_compact_date(text: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(text, COMPACT_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_fixed_patterns(text: &str) -> Option<DateTime<Utc>> {
    FIXED_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, FIXED_DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}
