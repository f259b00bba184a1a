//! Number, currency and percentage formatting
//!
//! Rounding works on the exact binary value of the `f64`, half away from
//! zero, so `1.005` keeps `1.00` while `2.5` becomes `3`.

use serde_json::json;
use crate::i18n::options::{number_to_string, Options};

/// Largest supported number of fraction digits
pub const MAX_PRECISION: usize = 100;

/// Every fraction digit of an `f64` is exact at this precision
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Magnitude from which plain notation stops
const PLAIN_NOTATION_LIMIT: f64 = 1e21;

/// Built-in options for plain numbers
pub fn number_defaults() -> Options {
    Options::from([
        ("precision", json!(3)),
        ("separator", json!(".")),
        ("delimiter", json!(",")),
    ])
}

/// Built-in options for currency
pub fn currency_defaults() -> Options {
    Options::from([
        ("unit", json!("$")),
        ("precision", json!(2)),
        ("format", json!("%u%n")),
        ("delimiter", json!(",")),
        ("separator", json!(".")),
    ])
}

/// Built-in options for percentages
pub fn percentage_defaults() -> Options {
    Options::from([
        ("precision", json!(3)),
        ("separator", json!(".")),
        ("delimiter", json!("")),
    ])
}

/// Fixed-precision number with grouped thousands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    pub precision: usize,
    /// Between integer and fraction digits
    pub separator: String,
    /// Between groups of three integer digits
    pub delimiter: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::from_options(&number_defaults())
    }
}

impl NumberFormat {
    /// Read `precision`, `separator` and `delimiter` from merged options
    pub fn from_options(options: &Options) -> Self {
        Self {
            precision: precision_option(options),
            separator: options.get_text("separator").unwrap_or_default(),
            delimiter: options.get_text("delimiter").unwrap_or_default(),
        }
    }

    pub fn format(&self, number: f64) -> String {
        let fixed = to_fixed(number, self.precision);
        if !number.is_finite() || number.abs() >= PLAIN_NOTATION_LIMIT {
            return fixed;
        }

        let (sign, unsigned) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed.as_str()),
        };
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let mut formatted = format!("{}{}", sign, group_digits(integer, &self.delimiter));
        if self.precision > 0 {
            formatted.push_str(&self.separator);
            formatted.push_str(fraction);
        }
        formatted
    }
}

/// Number placed into a `%u`/`%n` template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub number: NumberFormat,
    pub unit: String,
    /// Template such as `%u%n` or `%n %u`
    pub format: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::from_options(&currency_defaults())
    }
}

impl CurrencyFormat {
    pub fn from_options(options: &Options) -> Self {
        Self {
            number: NumberFormat::from_options(options),
            unit: options.get_text("unit").unwrap_or_default(),
            format: options.get_text("format").unwrap_or_default(),
        }
    }

    pub fn format(&self, number: f64) -> String {
        let formatted = self.number.format(number);
        self.format
            .replacen("%u", &self.unit, 1)
            .replacen("%n", &formatted, 1)
    }
}

/// Number followed by a percent sign
pub fn format_percentage(number: f64, format: &NumberFormat) -> String {
    format!("{}%", format.format(number))
}

fn precision_option(options: &Options) -> usize {
    let precision = options
        .get_number("precision")
        .or_else(|| options.get_text("precision").and_then(|p| p.trim().parse::<f64>().ok()))
        .unwrap_or(0.0);

    if precision.is_nan() || precision <= 0.0 {
        0
    } else {
        (precision.trunc() as usize).min(MAX_PRECISION)
    }
}

/// `number` with exactly `precision` fraction digits, rounded half away from zero
pub fn to_fixed(number: f64, precision: usize) -> String {
    if !number.is_finite() || number.abs() >= PLAIN_NOTATION_LIMIT {
        return number_to_string(number);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, number.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(precision))
        .collect();

    let round_up = fraction.as_bytes().get(precision).map_or(false, |d| *d >= b'5');
    let mut integer_len = integer.len();
    if round_up && !increment(&mut digits) {
        digits.insert(0, b'1');
        integer_len += 1;
    }

    let mut fixed = String::with_capacity(digits.len() + 2);
    if number < 0.0 {
        fixed.push('-');
    }
    fixed.extend(digits[..integer_len].iter().map(|&d| d as char));
    if precision > 0 {
        fixed.push('.');
        fixed.extend(digits[integer_len..].iter().map(|&d| d as char));
    }
    fixed
}

/// Add one to a decimal digit string; false when the carry overflows
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

/// Join groups of three digits, counted from the right, with `delimiter`
pub fn group_digits(digits: &str, delimiter: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * delimiter.len());

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push_str(delimiter);
        }
        grouped.push(ch);
    }
    grouped
}
