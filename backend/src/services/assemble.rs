//! Output document assembly.
//!
//! Combines a metadata block built from the calendar's identity with every
//! discovered result, rendered as XSD dateTime / XSD duration strings or
//! `N/A`.

use chrono::{Datelike, NaiveDate, TimeZone};
use chrono_tz::{OffsetComponents, OffsetName, Tz};
use log::debug;

use super::discovery::discover;
use super::ordering::order_buckets;
use crate::error::{FormatterError, FormatterResult};
use crate::format::{format_decimal, format_xsd_date_time, format_xsd_duration};
use crate::models::{CalendarSource, Metadata, OutputDocument, TimeQuantity};

/// Rendering of results that are not available for the date and place.
pub const NOT_AVAILABLE: &str = "N/A";

/// Build the ordered output document for a calendar.
pub fn to_json(source: &dyn CalendarSource) -> OutputDocument {
    let metadata = build_metadata(source);
    let time_zone = source.geo_location().time_zone;
    let mut document = OutputDocument::new(metadata, source.output_kind());

    let buckets = order_buckets(discover(source));
    debug!(
        "Assembling {} output: {} timestamps, {} durations, {} unavailable",
        document.kind_key(),
        buckets.timestamps.len(),
        buckets.durations.len(),
        buckets.unavailable.len()
    );

    for entry in buckets.timestamps {
        let local = entry.value.with_timezone(&time_zone);
        document.insert(entry.label, format_xsd_date_time(&local));
    }
    for entry in buckets.durations {
        let quantity = TimeQuantity::from_millis_f64(entry.millis);
        document.insert(entry.label, format_xsd_duration(&quantity));
    }
    for label in buckets.unavailable {
        document.insert(label, NOT_AVAILABLE);
    }

    document
}

/// XML export has been removed; this always fails.
pub fn to_xml(_source: &dyn CalendarSource) -> FormatterResult<String> {
    Err(FormatterError::UnsupportedOperation("XML serialization"))
}

/// Metadata block describing the calendar's date, algorithm and location.
pub fn build_metadata(source: &dyn CalendarSource) -> Metadata {
    let geo = source.geo_location();
    let date = source.date();

    Metadata {
        date: date.format("%Y-%m-%d").to_string(),
        calendar_type: source.type_name().to_string(),
        algorithm: source.calculator_name().to_string(),
        location: geo.location_name.clone(),
        latitude: format_decimal(geo.latitude),
        longitude: format_decimal(geo.longitude),
        elevation: format_decimal(geo.elevation),
        time_zone_name: standard_zone_name(geo.time_zone, date),
        time_zone_id: geo.time_zone.name().to_string(),
        time_zone_offset: format_decimal(standard_offset_hours(geo.time_zone, date)),
    }
}

/// Standard (non-daylight) UTC offset of `tz` around `date`, in hours.
pub fn standard_offset_hours(tz: Tz, date: NaiveDate) -> f64 {
    let offset = tz.offset_from_utc_date(&date);
    offset.base_utc_offset().num_seconds() as f64 / 3600.0
}

/// Abbreviation of the zone's standard time in the year of `date`,
/// falling back to the IANA name when the zone has none.
pub fn standard_zone_name(tz: Tz, date: NaiveDate) -> String {
    let samples = [
        date,
        NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
        NaiveDate::from_ymd_opt(date.year(), 7, 1).unwrap_or(date),
    ];
    samples
        .iter()
        .map(|day| tz.offset_from_utc_date(day))
        .find(|offset| offset.dst_offset().num_seconds() == 0)
        .and_then(|offset| offset.abbreviation().map(str::to_string))
        .unwrap_or_else(|| tz.name().to_string())
}
