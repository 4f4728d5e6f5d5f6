//! Duration rendering: sexagesimal, XSD duration and decimal numbers.

use std::fmt::Write;

use super::mode::FormatMode;
use crate::models::TimeQuantity;

/// Render a quantity in the given mode.
pub fn format_time(quantity: &TimeQuantity, mode: FormatMode) -> String {
    let settings = match mode.settings() {
        Some(settings) => settings,
        None => return format_xsd_duration(quantity),
    };

    let mut out = String::new();
    if quantity.is_negative() {
        out.push('-');
    }
    if settings.prepend_zero_hours {
        let _ = write!(out, "{:02}", quantity.hours());
    } else {
        let _ = write!(out, "{}", quantity.hours());
    }
    let _ = write!(out, ":{:02}", quantity.minutes());
    if settings.use_seconds {
        let _ = write!(out, ":{:02}", quantity.seconds());
    }
    if settings.use_millis {
        out.push('.');
        if mode == FormatMode::SexagesimalXsd {
            out.push_str(&canonical_fraction(quantity.milliseconds()));
        } else {
            let _ = write!(out, "{:03}", quantity.milliseconds());
        }
    }
    out
}

/// Fractional second digits without trailing zeros, at least one digit.
fn canonical_fraction(milliseconds: u32) -> String {
    if milliseconds == 0 {
        return "0".to_string();
    }
    format!("{:03}", milliseconds)
        .trim_end_matches('0')
        .to_string()
}

/// Render a quantity as an XSD duration such as `PT1H30M` or `-PT2.500S`.
///
/// Zero-valued units are left out; the all-zero quantity is `PT0S`.
pub fn format_xsd_duration(quantity: &TimeQuantity) -> String {
    if quantity.is_zero() {
        return "PT0S".to_string();
    }

    let mut out = String::with_capacity(16);
    if quantity.is_negative() {
        out.push('-');
    }
    out.push_str("PT");
    if quantity.hours() != 0 {
        let _ = write!(out, "{}H", quantity.hours());
    }
    if quantity.minutes() != 0 {
        let _ = write!(out, "{}M", quantity.minutes());
    }
    if quantity.seconds() != 0 || quantity.milliseconds() != 0 {
        let _ = write!(out, "{}.{:03}S", quantity.seconds(), quantity.milliseconds());
    }
    out
}

/// Render a number with at least one decimal place.
///
/// Values with a fractional part keep every significant digit; whole values
/// get a single `.0`.
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() != 0.0 {
        value.to_string()
    } else {
        format!("{:.1}", value)
    }
}
