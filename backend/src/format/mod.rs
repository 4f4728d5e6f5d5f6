//! Rendering of durations, decimals and zoned timestamps.

pub mod duration;
pub mod formatter;
pub mod mode;
pub mod pattern;

pub use duration::{format_decimal, format_time, format_xsd_duration};
pub use formatter::{parse_time_zone, ZmanimFormatter};
pub use mode::{FormatMode, TimeFormatSettings};
pub use pattern::{format_xsd_date_time, DatePattern, DEFAULT_DATE_PATTERN, XSD_DATE_TIME_PATTERN};
