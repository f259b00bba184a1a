//! Date input parsing
//!
//! Dates are accepted as `YYYY-MM-DD[ T]HH:MM:SS[Z]` text, as millisecond
//! UNIX timestamps, as free-form text in a few common layouts, or as an
//! existing `chrono` date. Every result is expressed in a display [`Zone`].

use std::fmt;
use std::sync::OnceLock;
use chrono::{
    DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc,
};
use regex::Regex;
use crate::utils::logging::log_invalid_date;

/// Text form of an unparseable date
pub const INVALID_DATE: &str = "Invalid Date";

/// Default text form of a valid date, e.g. `Thu Mar 05 2020 00:00:00 GMT+0000`
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Largest timestamp magnitude in milliseconds (100 000 000 days)
const MAX_TIMESTAMP_MILLIS: f64 = 8.64e15;

/// Whether a millisecond timestamp names a representable date
///
/// Besides [`MAX_TIMESTAMP_MILLIS`], dates must fall inside chrono's range,
/// which ends in year 262 142 (about `8.21e15` ms). Timestamps past that
/// parse as invalid.
fn timestamp_in_range(millis: f64) -> bool {
    let earliest = DateTime::<Utc>::MIN_UTC.timestamp_millis() as f64;
    let latest = DateTime::<Utc>::MAX_UTC.timestamp_millis() as f64;

    millis.is_finite()
        && millis.abs() <= MAX_TIMESTAMP_MILLIS
        && (earliest..=latest).contains(&millis.trunc())
}

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
];

const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

fn iso_regex() -> &'static Regex {
    static ISO: OnceLock<Regex> = OnceLock::new();
    ISO.get_or_init(|| {
        Regex::new(r"(\d{4})-(\d{2})-(\d{2})(?:[ |T](\d{2}):(\d{2}):(\d{2}))?(Z)?")
            .expect("date pattern is valid")
    })
}

/// Time zone dates are displayed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Zone {
    /// The host's local offset
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl Zone {
    pub fn utc() -> Self {
        Zone::Fixed(Utc.fix())
    }

    /// Interpret wall-clock time in this zone
    ///
    /// A time skipped by a daylight-saving transition moves forward by an hour,
    /// so `02:30` on a spring-forward night becomes `03:30`.
    pub fn from_local(&self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Zone::Local => {
                let resolve = |naive: &NaiveDateTime| Local.from_local_datetime(naive).earliest();

                resolve(naive)
                    .or_else(|| {
                        naive
                            .checked_add_signed(Duration::hours(1))
                            .and_then(|later| resolve(&later))
                    })
                    .map(|dt| dt.with_timezone(dt.offset()))
            }
            Zone::Fixed(offset) => offset.from_local_datetime(naive).single(),
        }
    }

    /// Interpret UTC wall-clock time, expressed in this zone
    pub fn from_utc(&self, naive: &NaiveDateTime) -> DateTime<FixedOffset> {
        self.convert(&Utc.from_utc_datetime(naive))
    }

    /// Milliseconds since the UNIX epoch, expressed in this zone
    pub fn from_millis(&self, millis: i64) -> Option<DateTime<FixedOffset>> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(|dt| self.convert(&dt))
    }

    pub fn convert<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> DateTime<FixedOffset> {
        match self {
            Zone::Local => {
                let local = date.with_timezone(&Local);
                local.with_timezone(local.offset())
            }
            Zone::Fixed(offset) => date.with_timezone(offset),
        }
    }
}

/// Anything a date can be parsed from
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Text(String),
    /// Milliseconds since the UNIX epoch
    Millis(f64),
    Instant(DateTime<FixedOffset>),
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<i64> for DateInput {
    fn from(millis: i64) -> Self {
        DateInput::Millis(millis as f64)
    }
}

impl From<f64> for DateInput {
    fn from(millis: f64) -> Self {
        DateInput::Millis(millis)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(date: DateTime<Tz>) -> Self {
        let offset = date.offset().fix();
        DateInput::Instant(date.with_timezone(&offset))
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Text(text) => f.write_str(text),
            DateInput::Millis(millis) => write!(f, "{}", millis),
            DateInput::Instant(date) => write!(f, "{}", date.to_rfc3339()),
        }
    }
}

/// Result of date parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDate {
    Valid(DateTime<FixedOffset>),
    Invalid,
}

impl ParsedDate {
    pub fn valid(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            ParsedDate::Valid(date) => Some(date),
            ParsedDate::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ParsedDate::Valid(_))
    }
}

impl From<Option<DateTime<FixedOffset>>> for ParsedDate {
    fn from(date: Option<DateTime<FixedOffset>>) -> Self {
        date.map_or(ParsedDate::Invalid, ParsedDate::Valid)
    }
}

impl fmt::Display for ParsedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedDate::Valid(date) => write!(f, "{}", date.format(DISPLAY_FORMAT)),
            ParsedDate::Invalid => f.write_str(INVALID_DATE),
        }
    }
}

/// Parse `input` into a date in `zone`
pub fn parse_date(input: &DateInput, zone: Zone) -> ParsedDate {
    let parsed = match input {
        DateInput::Text(text) => parse_text(text, zone),
        DateInput::Millis(millis) => {
            if timestamp_in_range(*millis) {
                zone.from_millis(millis.trunc() as i64)
            } else {
                None
            }
        }
        DateInput::Instant(date) => Some(zone.convert(date)),
    };

    if parsed.is_none() {
        log_invalid_date(&input.to_string());
    }
    parsed.into()
}

fn parse_text(text: &str, zone: Zone) -> Option<DateTime<FixedOffset>> {
    let Some(caps) = iso_regex().captures(text) else {
        return parse_free_form(text.trim(), zone);
    };

    let field = |index: usize| -> i64 {
        caps.get(index)
            .and_then(|m| m.as_str().parse::<i64>().ok())
            .unwrap_or(0)
    };
    let naive = calendar_datetime(field(1), field(2), field(3), field(4), field(5), field(6))?;

    if caps.get(7).is_some() {
        Some(zone.from_utc(&naive))
    } else {
        zone.from_local(&naive)
    }
}

/// Build a date, rolling out-of-range fields over into the next unit
///
/// `2021-02-30` becomes March 2nd and `24:00:00` the next midnight.
fn calendar_datetime(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
) -> Option<NaiveDateTime> {
    let months = year * 12 + (month - 1);
    let first = NaiveDate::from_ymd_opt(
        i32::try_from(months.div_euclid(12)).ok()?,
        u32::try_from(months.rem_euclid(12) + 1).ok()?,
        1,
    )?;

    let elapsed = Duration::days(day - 1)
        + Duration::hours(hour)
        + Duration::minutes(minute)
        + Duration::seconds(second);
    first.and_hms_opt(0, 0, 0)?.checked_add_signed(elapsed)
}

fn parse_free_form(text: &str, zone: Zone) -> Option<DateTime<FixedOffset>> {
    let zoned = DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_rfc2822(text))
        .or_else(|_| DateTime::parse_from_str(text, DISPLAY_FORMAT));
    if let Ok(date) = zoned {
        return Some(zone.convert(&date));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NAIVE_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .and_then(|naive| zone.from_local(&naive))
}
