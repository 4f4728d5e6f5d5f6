//! Public formatting contracts.

use chrono::{FixedOffset, TimeZone};
use chrono_tz::Tz;

use zmanim_json::config::FormatterConfig;
use zmanim_json::format::{FormatMode, XSD_DATE_TIME_PATTERN};
use zmanim_json::models::TimeQuantity;
use zmanim_json::ZmanimFormatter;

const MINUTE: i64 = 60_000;

#[test]
fn test_ninety_minutes_in_every_mode() {
    let mut formatter = ZmanimFormatter::new(Tz::UTC);
    let expected = [
        (FormatMode::Sexagesimal, "1:30"),
        (FormatMode::SexagesimalSeconds, "1:30:00"),
        (FormatMode::SexagesimalMillis, "1:30:00.000"),
        (FormatMode::SexagesimalXsd, "01:30:00.0"),
        (FormatMode::XsdDuration, "PT1H30M"),
        (FormatMode::Decimal, "1:30"),
    ];
    for (mode, rendered) in expected {
        formatter.set_time_format(mode);
        assert_eq!(formatter.format(90 * MINUTE), rendered, "mode {}", mode);
    }
}

#[test]
fn test_quantity_and_millis_agree() {
    let formatter = ZmanimFormatter::new(Tz::UTC).with_time_format(FormatMode::SexagesimalMillis);
    let quantity = TimeQuantity::new(26, 3, 4, 5, false);
    assert_eq!(formatter.format(quantity), "26:03:04.005");
    assert_eq!(formatter.format(quantity.to_millis() as i64), "26:03:04.005");
}

#[test]
fn test_xsd_duration_static() {
    assert_eq!(ZmanimFormatter::format_xsd_duration_time(0_i64), "PT0S");
    assert_eq!(ZmanimFormatter::format_xsd_duration_time(-(90 * MINUTE)), "-PT1H30M");
    assert_eq!(ZmanimFormatter::format_xsd_duration_time(72 * MINUTE), "PT1H12M");
    assert_eq!(ZmanimFormatter::format_xsd_duration_time(0.4_f64), "PT0S");
    assert_eq!(
        ZmanimFormatter::format_xsd_duration_time(TimeQuantity::new(0, 0, 0, 0, true)),
        "PT0S"
    );
}

#[test]
fn test_xsd_duration_beyond_i64_millis() {
    assert_eq!(
        ZmanimFormatter::format_xsd_duration_time(1e20_f64),
        "PT27777777777777H46M40.000S"
    );
    assert_eq!(
        ZmanimFormatter::format_xsd_duration_time(TimeQuantity::new(u64::MAX, 60, 0, 0, false)),
        format!("PT{}H59M59.999S", u64::MAX)
    );
}

#[test]
fn test_format_decimal_static() {
    assert_eq!(ZmanimFormatter::format_decimal(5.0), "5.0");
    assert_eq!(ZmanimFormatter::format_decimal(5.25), "5.25");
    assert_eq!(ZmanimFormatter::format_decimal(-3.5), "-3.5");
}

#[test]
fn test_format_date_time_from_fixed_offset() {
    let ts = FixedOffset::east_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 12, 25, 7, 15, 0)
        .unwrap();
    let mut formatter = ZmanimFormatter::new(Tz::America__Chicago);
    assert_eq!(formatter.format_date_time(&ts), "10:15:00");

    formatter.set_date_format(XSD_DATE_TIME_PATTERN).unwrap();
    assert_eq!(formatter.format_date_time(&ts), "2024-12-24T22:15:00-06:00");
    assert_eq!(formatter.xs_date_time(&ts), "2024-12-24T22:15:00-06:00");
}

#[test]
fn test_time_zone_setter() {
    let mut formatter = ZmanimFormatter::from_zone_id("UTC").unwrap();
    formatter.set_time_zone(Tz::Asia__Tokyo);
    assert_eq!(formatter.time_zone(), Tz::Asia__Tokyo);

    let ts = chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(formatter.xs_date_time(&ts), "2024-01-01T09:00:00+09:00");
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zmanim.toml");
    std::fs::write(
        &path,
        "[formatter]\ntime_format = \"sexagesimal_seconds\"\ntime_zone = \"Europe/Paris\"\n",
    )
    .unwrap();

    let formatter = FormatterConfig::from_file(&path)
        .unwrap()
        .into_formatter()
        .unwrap();
    assert_eq!(formatter.time_format(), FormatMode::SexagesimalSeconds);
    assert_eq!(formatter.time_zone(), Tz::Europe__Paris);
    assert_eq!(formatter.format(90 * MINUTE), "1:30:00");
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = FormatterConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error: Failed to read config file"));
}
