//! Configurable formatter for durations and zoned timestamps.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;

use super::duration::{format_decimal, format_time, format_xsd_duration};
use super::mode::FormatMode;
use super::pattern::{format_xsd_date_time, DatePattern};
use crate::error::{FormatterError, FormatterResult};
use crate::models::{CalendarSource, OutputDocument, TimeQuantity};

/// Formatter configuration: time format mode, date pattern and time zone.
///
/// Setters take `&mut self`, so a formatter shared between callers has to be
/// guarded by its owner. The `with_*` builders return a new value for the
/// one-formatter-per-configuration style.
#[derive(Debug, Clone, PartialEq)]
pub struct ZmanimFormatter {
    time_format: FormatMode,
    date_format: DatePattern,
    time_zone: Tz,
}

impl ZmanimFormatter {
    /// Formatter for `time_zone` with the `sexagesimal_xsd` mode and the
    /// `h:mm:ss` date pattern.
    pub fn new(time_zone: Tz) -> Self {
        Self {
            time_format: FormatMode::SexagesimalXsd,
            date_format: DatePattern::default(),
            time_zone,
        }
    }

    /// Same as [`ZmanimFormatter::new`] with an IANA zone identifier.
    pub fn from_zone_id(zone_id: &str) -> FormatterResult<Self> {
        Ok(Self::new(parse_time_zone(zone_id)?))
    }

    pub fn with_settings(
        time_format: FormatMode,
        date_format: &str,
        time_zone: Tz,
    ) -> FormatterResult<Self> {
        Ok(Self {
            time_format,
            date_format: DatePattern::parse(date_format)?,
            time_zone,
        })
    }

    pub fn with_time_format(mut self, time_format: FormatMode) -> Self {
        self.time_format = time_format;
        self
    }

    pub fn with_time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn set_time_format(&mut self, time_format: FormatMode) {
        self.time_format = time_format;
    }

    pub fn time_format(&self) -> FormatMode {
        self.time_format
    }

    /// Replace the date pattern. The previous pattern is kept on error.
    pub fn set_date_format(&mut self, date_format: &str) -> FormatterResult<()> {
        self.date_format = DatePattern::parse(date_format)?;
        Ok(())
    }

    pub fn date_format(&self) -> &str {
        self.date_format.as_str()
    }

    pub fn set_time_zone(&mut self, time_zone: Tz) {
        self.time_zone = time_zone;
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Render a duration (milliseconds or a [`TimeQuantity`]) in the
    /// configured mode.
    pub fn format(&self, duration: impl Into<TimeQuantity>) -> String {
        format_time(&duration.into(), self.time_format)
    }

    /// Render a timestamp in the configured zone and date pattern.
    pub fn format_date_time<Z: TimeZone>(&self, timestamp: &DateTime<Z>) -> String {
        let local = timestamp.with_timezone(&self.time_zone);
        if self.date_format.is_xsd_date_time() {
            format_xsd_date_time(&local)
        } else {
            self.date_format.render(&local)
        }
    }

    /// Render a timestamp as an XSD dateTime in the configured zone,
    /// regardless of the date pattern.
    pub fn xs_date_time<Z: TimeZone>(&self, timestamp: &DateTime<Z>) -> String {
        format_xsd_date_time(&timestamp.with_timezone(&self.time_zone))
    }

    pub fn format_xsd_duration_time(duration: impl Into<TimeQuantity>) -> String {
        format_xsd_duration(&duration.into())
    }

    pub fn format_decimal(value: f64) -> String {
        format_decimal(value)
    }

    pub fn to_json(source: &dyn CalendarSource) -> OutputDocument {
        crate::services::to_json(source)
    }

    pub fn to_xml(source: &dyn CalendarSource) -> FormatterResult<String> {
        crate::services::to_xml(source)
    }
}

/// Look up an IANA time zone identifier.
pub fn parse_time_zone(zone_id: &str) -> FormatterResult<Tz> {
    zone_id
        .trim()
        .parse::<Tz>()
        .map_err(|_| FormatterError::UnknownTimeZone(zone_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::XSD_DATE_TIME_PATTERN;
    use chrono::Utc;

    #[test]
    fn test_defaults() {
        let formatter = ZmanimFormatter::new(Tz::UTC);
        assert_eq!(formatter.time_format(), FormatMode::SexagesimalXsd);
        assert_eq!(formatter.date_format(), "h:mm:ss");
        assert_eq!(formatter.time_zone(), Tz::UTC);
        assert_eq!(formatter.format(0_i64), "00:00:00.0");
    }

    #[test]
    fn test_from_zone_id() {
        let formatter = ZmanimFormatter::from_zone_id("Asia/Jerusalem").unwrap();
        assert_eq!(formatter.time_zone(), Tz::Asia__Jerusalem);
        assert_eq!(
            ZmanimFormatter::from_zone_id("Mars/Olympus_Mons"),
            Err(FormatterError::UnknownTimeZone("Mars/Olympus_Mons".to_string()))
        );
    }

    #[test]
    fn test_format_in_each_mode() {
        let mut formatter = ZmanimFormatter::new(Tz::UTC);
        formatter.set_time_format(FormatMode::SexagesimalSeconds);
        assert_eq!(formatter.format(90 * 60_000_i64), "1:30:00");
        formatter.set_time_format(FormatMode::XsdDuration);
        assert_eq!(formatter.format(-(90 * 60_000_i64)), "-PT1H30M");
        assert_eq!(formatter.format(5_400_000.75_f64), "PT1H30M");
    }

    #[test]
    fn test_set_date_format_keeps_previous_on_error() {
        let mut formatter = ZmanimFormatter::new(Tz::UTC);
        assert!(formatter.set_date_format("yyyy-bb").is_err());
        assert_eq!(formatter.date_format(), "h:mm:ss");
        formatter.set_date_format("HH:mm").unwrap();
        assert_eq!(formatter.date_format(), "HH:mm");
    }

    #[test]
    fn test_format_date_time_converts_zone() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 20, 2, 33, 5).unwrap();
        let formatter = ZmanimFormatter::new(Tz::Asia__Jerusalem);
        assert_eq!(formatter.format_date_time(&ts), "5:33:05");

        let xsd = ZmanimFormatter::with_settings(
            FormatMode::SexagesimalXsd,
            XSD_DATE_TIME_PATTERN,
            Tz::Asia__Jerusalem,
        )
        .unwrap();
        assert_eq!(xsd.format_date_time(&ts), "2024-06-20T05:33:05+03:00");
    }

    #[test]
    fn test_xs_date_time_ignores_pattern() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
        let formatter = ZmanimFormatter::new(Tz::UTC).with_time_zone(Tz::America__Los_Angeles);
        assert_eq!(formatter.xs_date_time(&ts), "2024-01-02T04:00:00-08:00");
    }

    #[test]
    fn test_static_helpers() {
        assert_eq!(ZmanimFormatter::format_xsd_duration_time(0_i64), "PT0S");
        assert_eq!(ZmanimFormatter::format_decimal(5.0), "5.0");
        assert_eq!(ZmanimFormatter::format_decimal(5.25), "5.25");
    }
}
