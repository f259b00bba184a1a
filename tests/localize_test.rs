//! Integration tests for date, number, currency and percentage localization

mod helpers;

use chrono::{FixedOffset, TimeZone, Utc};
use serde_json::json;
use serial_test::serial;
use tongues::{Options, ParsedDate, Zone};

use helpers::test_translator;

#[test]
fn test_to_time_default_format() {
    let translator = test_translator();
    assert_eq!(translator.to_time("date.formats.default", "2020-03-05"), "2020-03-05");
}

#[test]
fn test_localize_date_formats() {
    let translator = test_translator();

    assert_eq!(translator.l("date.formats.default", "2020-03-05"), "2020-03-05");
    assert_eq!(translator.l("date.formats.short", "2020-03-05"), "Mar 5");
    assert_eq!(
        translator.l("date.formats.long", "2020-03-05"),
        "Thursday, March 05, 2020"
    );
}

#[test]
fn test_localize_time_formats() {
    let translator = test_translator();

    assert_eq!(
        translator.l("time.formats.default", "2020-03-05T14:07:09Z"),
        "Thu, 05 Mar 2020 14:07:09 +0000"
    );
    assert_eq!(translator.l("time.formats.short", "2020-03-05 00:30:00"), "12:30 AM");
    assert_eq!(translator.l("time.formats.short", "2020-03-05 12:05:00"), "12:05 PM");
}

#[test]
fn test_localize_timestamp_and_chrono_input() {
    let translator = test_translator();

    assert_eq!(translator.l("date.formats.default", 1_583_366_400_000_i64), "2020-03-05");

    let instant = Utc.with_ymd_and_hms(2021, 12, 24, 18, 0, 0).unwrap();
    assert_eq!(translator.l("date.formats.long", instant), "Friday, December 24, 2021");
}

#[test]
fn test_localize_date_in_other_locale() {
    let mut translator = test_translator();
    translator.set_locale("pt-BR");

    assert_eq!(translator.l("date.formats.default", "2020-03-05"), "05/03/2020");
    assert_eq!(
        translator.l("date.formats.long", "2020-03-05"),
        "quinta-feira, 5 de março de 2020"
    );
    assert_eq!(translator.l("time.formats.short", "2020-03-05 15:45:00"), "3:45 da tarde");
}

#[test]
fn test_to_time_without_format_or_names() {
    let mut translator = test_translator();

    assert_eq!(
        translator.to_time("date.formats.unknown", "2020-03-05"),
        "Thu Mar 05 2020 00:00:00 GMT+0000"
    );

    translator.set_locale("fr");
    assert_eq!(
        translator.l("date.formats.default", "2020-03-05 10:00:00"),
        "Thu Mar 05 2020 10:00:00 GMT+0000"
    );
}

#[test]
fn test_to_time_invalid_input() {
    let translator = test_translator();

    assert_eq!(translator.to_time("date.formats.default", "someday"), "Invalid Date");
    assert_eq!(translator.parse_date("someday"), ParsedDate::Invalid);
}

#[test]
fn test_fixed_zone_offset() {
    let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    let translator = test_translator().with_zone(Zone::Fixed(offset));

    assert_eq!(
        translator.l("time.formats.default", "2020-03-05T00:00:00Z"),
        "Thu, 05 Mar 2020 05:30:00 +0530"
    );
    assert_eq!(
        translator.l("time.formats.default", "2020-03-05 00:00:00"),
        "Thu, 05 Mar 2020 00:00:00 +0530"
    );
}

#[test]
#[serial]
fn test_local_time_in_daylight_saving_gap() {
    if !std::path::Path::new("/usr/share/zoneinfo/America/New_York").exists() {
        return;
    }

    let previous = std::env::var("TZ").ok();
    std::env::set_var("TZ", "America/New_York");

    let translator = test_translator().with_zone(Zone::Local);
    let skipped = translator.l("time.formats.default", "2021-03-14 02:30:00");
    let after = translator.l("time.formats.default", "2021-03-14 03:30:00");
    let before = translator.l("time.formats.default", "2021-03-14 01:30:00");
    let parsed = translator.parse_date("2021-03-14 02:30:00");

    match previous {
        Some(tz) => std::env::set_var("TZ", tz),
        None => std::env::remove_var("TZ"),
    }

    assert_eq!(skipped, "Sun, 14 Mar 2021 03:30:00 -0400");
    assert_eq!(after, skipped);
    assert_eq!(before, "Sun, 14 Mar 2021 01:30:00 -0500");
    assert!(parsed.is_valid());
}

#[test]
fn test_strftime_with_catalog_names() {
    let translator = test_translator();
    let date = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2019, 7, 1, 8, 5, 0)
        .unwrap();

    assert_eq!(translator.strftime(&date, "%a %-d %b, %-I:%M%p"), "Mon 1 Jul, 8:05AM");
}

#[test]
fn test_number_formatting() {
    let translator = test_translator();

    let options = Options::from([
        ("precision", json!(2)),
        ("delimiter", json!(",")),
        ("separator", json!(".")),
    ]);
    assert_eq!(translator.to_number(1234567.891, &options), "1,234,567.89");
    assert_eq!(translator.to_number(1234567.891, &Options::new()), "1,234,567.891");
    assert_eq!(translator.l("number", 1234567.891), "1,234,567.891");
}

#[test]
fn test_currency_formatting() {
    let translator = test_translator();

    let options = Options::from([
        ("unit", json!("$")),
        ("format", json!("%u%n")),
        ("precision", json!(2)),
    ]);
    assert_eq!(translator.to_currency(42.0, &options), "$42.00");
    assert_eq!(translator.l("currency", 42), "$42.00");
    assert_eq!(
        translator.to_currency(1234.5, &Options::new().with("unit", "£").with("format", "%n %u")),
        "1,234.50 £"
    );
}

#[test]
fn test_percentage_formatting() {
    let translator = test_translator();

    assert_eq!(
        translator.to_percentage(12.3456, &Options::new().with("precision", 2)),
        "12.35%"
    );
    assert_eq!(translator.to_percentage(12.3456, &Options::new()), "12.346%");
    assert_eq!(translator.to_percentage(1234.5, &Options::new()), "1234.500%");
}

#[test]
fn test_number_formats_from_catalog() {
    let mut translator = test_translator();
    translator.set_locale("pt-BR");

    assert_eq!(translator.l("number", 1234567.891), "1.234.567,89");
    assert_eq!(translator.l("currency", 1234.5), "R$ 1.234,50");
    assert_eq!(
        translator.to_currency(5.0, &Options::new().with("unit", "US$")),
        "US$ 5,00"
    );
    assert_eq!(translator.to_percentage(12.3456, &Options::new()), "12,3%");
    assert_eq!(translator.to_percentage(1234.5, &Options::new()), "1.234,5%");
}

#[test]
fn test_localize_passthrough() {
    let translator = test_translator();

    assert_eq!(translator.l("unknown", "raw text"), "raw text");
    assert_eq!(translator.l("unknown", 3), "3");
    assert_eq!(translator.l("number", "not a number"), "not a number");
    assert_eq!(translator.l("percentage", 12.3456), "12.3456");
}
