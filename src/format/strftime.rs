//! A strftime subset driven by catalog day and month names
//!
//! Supported directives:
//!
//! | Directive | Meaning |
//! |-----------|---------|
//! | `%a` `%A` | abbreviated / full day name |
//! | `%b` `%B` | abbreviated / full month name |
//! | `%d` `%-d` | day of month |
//! | `%H` `%-H` | hour, 24-hour clock |
//! | `%I` `%-I` | hour, 12-hour clock |
//! | `%m` `%-m` | month number |
//! | `%M` `%-M` | minute |
//! | `%S` `%-S` | second |
//! | `%p` | meridian |
//! | `%w` | weekday number, Sunday is 0 |
//! | `%y` `%-y` | two-digit year |
//! | `%Y` | full year |
//! | `%z` | `±HHMM` offset |
//!
//! The dash forms drop zero padding. Anything else is copied verbatim.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use crate::i18n::catalog::Node;

const DIRECTIVES: &str = "aAbBdHImMpSwyYz";
const UNPADDED_DIRECTIVES: &str = "dHImMSy";

/// Localized day and month names
///
/// Day lists are indexed by weekday from Sunday (0–6), month lists by month
/// number (1–12), so their first entry is usually `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateNames {
    pub day_names: Vec<Option<String>>,
    pub abbr_day_names: Vec<Option<String>>,
    pub month_names: Vec<Option<String>>,
    pub abbr_month_names: Vec<Option<String>>,
}

impl DateNames {
    /// Read the name lists of a catalog `date` group
    pub fn from_node(node: &Node) -> Option<Self> {
        if !matches!(node, Node::Branch(_)) {
            return None;
        }

        let list = |key: &str| -> Vec<Option<String>> {
            match node.child(key) {
                Some(Node::List(items)) => items
                    .iter()
                    .map(|item| item.as_text().map(str::to_string))
                    .collect(),
                _ => Vec::new(),
            }
        };

        Some(Self {
            day_names: list("day_names"),
            abbr_day_names: list("abbr_day_names"),
            month_names: list("month_names"),
            abbr_month_names: list("abbr_month_names"),
        })
    }
}

/// Meridian indicators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meridian {
    pub am: String,
    pub pm: String,
}

impl Default for Meridian {
    fn default() -> Self {
        Self {
            am: "AM".to_string(),
            pm: "PM".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Literal(&'a str),
    Directive { spec: char, padded: bool, text: &'a str },
}

fn tokenize(format: &str) -> Vec<Token<'_>> {
    let bytes = format.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let padded = bytes.get(i + 1) != Some(&b'-');
            let spec_at = if padded { i + 1 } else { i + 2 };

            if let Some(&spec) = bytes.get(spec_at) {
                let spec = spec as char;
                let known = if padded { DIRECTIVES } else { UNPADDED_DIRECTIVES };
                if spec.is_ascii() && known.contains(spec) {
                    if literal_start < i {
                        tokens.push(Token::Literal(&format[literal_start..i]));
                    }
                    tokens.push(Token::Directive {
                        spec,
                        padded,
                        text: &format[i..=spec_at],
                    });
                    i = spec_at + 1;
                    literal_start = i;
                    continue;
                }
            }
        }
        i += 1;
    }

    if literal_start < bytes.len() {
        tokens.push(Token::Literal(&format[literal_start..]));
    }
    tokens
}

/// Calendar fields of one date, computed once per call
struct DateFields {
    weekday: u32,
    day: u32,
    month: u32,
    year: i32,
    hour: u32,
    hour12: u32,
    minute: u32,
    second: u32,
    offset: String,
}

impl DateFields {
    fn new(date: &DateTime<FixedOffset>) -> Self {
        let hour = date.hour();
        Self {
            weekday: date.weekday().num_days_from_sunday(),
            day: date.day(),
            month: date.month(),
            year: date.year(),
            hour,
            hour12: match hour % 12 {
                0 => 12,
                h => h,
            },
            minute: date.minute(),
            second: date.second(),
            offset: format_offset(date.offset().local_minus_utc()),
        }
    }
}

fn format_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{}{:02}{:02}", sign, minutes / 60, minutes % 60)
}

fn number(value: impl Into<i64>, padded: bool) -> String {
    if padded {
        format!("{:02}", value.into())
    } else {
        value.into().to_string()
    }
}

fn name(names: &[Option<String>], index: u32) -> Option<&str> {
    names.get(index as usize).and_then(|name| name.as_deref())
}

/// Render `date` with `format`
///
/// A name directive whose list lacks the entry is copied verbatim.
pub fn strftime(
    date: &DateTime<FixedOffset>,
    format: &str,
    names: &DateNames,
    meridian: &Meridian,
) -> String {
    let fields = DateFields::new(date);
    let mut output = String::with_capacity(format.len() + 16);

    for token in tokenize(format) {
        let (spec, padded, text) = match token {
            Token::Literal(literal) => {
                output.push_str(literal);
                continue;
            }
            Token::Directive { spec, padded, text } => (spec, padded, text),
        };

        let rendered = match spec {
            'a' => name(&names.abbr_day_names, fields.weekday).map(str::to_string),
            'A' => name(&names.day_names, fields.weekday).map(str::to_string),
            'b' => name(&names.abbr_month_names, fields.month).map(str::to_string),
            'B' => name(&names.month_names, fields.month).map(str::to_string),
            'd' => Some(number(fields.day, padded)),
            'H' => Some(number(fields.hour, padded)),
            'I' => Some(number(fields.hour12, padded)),
            'm' => Some(number(fields.month, padded)),
            'M' => Some(number(fields.minute, padded)),
            'S' => Some(number(fields.second, padded)),
            'p' => Some(if fields.hour >= 12 { meridian.pm.clone() } else { meridian.am.clone() }),
            'w' => Some(fields.weekday.to_string()),
            'y' => Some(number(fields.year.rem_euclid(100), padded)),
            'Y' => Some(fields.year.to_string()),
            'z' => Some(fields.offset.clone()),
            _ => None,
        };

        output.push_str(rendered.as_deref().unwrap_or(text));
    }

    output
}
