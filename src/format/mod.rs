//! Locale formatting
//!
//! Date parsing, strftime rendering and number/currency/percentage
//! formatting. These functions take their locale data as arguments; the
//! [`Translator`](crate::Translator) looks that data up in the catalog.

pub mod date;
pub mod number;
pub mod strftime;

pub use date::{parse_date, DateInput, ParsedDate, Zone, DISPLAY_FORMAT, INVALID_DATE};
pub use number::{format_percentage, to_fixed, CurrencyFormat, NumberFormat};
pub use strftime::{strftime, DateNames, Meridian};
