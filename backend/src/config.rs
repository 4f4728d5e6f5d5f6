//! Formatter configuration file support.
//!
//! Reads formatter settings from a TOML file:
//!
//! ```toml
//! [formatter]
//! time_format = "xsd_duration"
//! date_format = "yyyy-MM-dd'T'HH:mm:ss"
//! time_zone = "America/New_York"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FormatterError, FormatterResult};
use crate::format::{parse_time_zone, FormatMode, ZmanimFormatter, DEFAULT_DATE_PATTERN};

/// Formatter configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatterConfig {
    #[serde(default)]
    pub formatter: FormatterSettings,
}

/// Formatter settings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatterSettings {
    #[serde(default)]
    pub time_format: FormatMode,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_PATTERN.to_string()
}

fn default_time_zone() -> String {
    "UTC".to_string()
}

impl Default for FormatterSettings {
    fn default() -> Self {
        Self {
            time_format: FormatMode::default(),
            date_format: default_date_format(),
            time_zone: default_time_zone(),
        }
    }
}

impl FormatterConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> FormatterResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            FormatterError::Configuration(format!("Failed to read config file: {}", e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> FormatterResult<Self> {
        toml::from_str(content).map_err(|e| {
            FormatterError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `zmanim.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> FormatterResult<Self> {
        let search_paths = [
            PathBuf::from("zmanim.toml"),
            PathBuf::from("backend/zmanim.toml"),
            PathBuf::from("../zmanim.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(FormatterError::Configuration(
            "No zmanim.toml found in standard locations".to_string(),
        ))
    }

    /// Build a formatter, validating the zone and date pattern.
    pub fn into_formatter(self) -> FormatterResult<ZmanimFormatter> {
        let settings = self.formatter;
        let time_zone = parse_time_zone(&settings.time_zone)?;
        ZmanimFormatter::with_settings(settings.time_format, &settings.date_format, time_zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    #[test]
    fn test_defaults_when_table_missing() {
        let config = FormatterConfig::from_toml_str("").unwrap();
        assert_eq!(config, FormatterConfig::default());
        let formatter = config.into_formatter().unwrap();
        assert_eq!(formatter.time_zone(), Tz::UTC);
        assert_eq!(formatter.date_format(), "h:mm:ss");
        assert_eq!(formatter.time_format(), FormatMode::SexagesimalXsd);
    }

    #[test]
    fn test_full_table() {
        let config = FormatterConfig::from_toml_str(
            r#"
            [formatter]
            time_format = "xsd_duration"
            date_format = "HH:mm"
            time_zone = "Asia/Jerusalem"
            "#,
        )
        .unwrap();
        let formatter = config.into_formatter().unwrap();
        assert_eq!(formatter.time_format(), FormatMode::XsdDuration);
        assert_eq!(formatter.time_zone(), Tz::Asia__Jerusalem);
        assert_eq!(formatter.format(5_400_000_i64), "PT1H30M");
    }

    #[test]
    fn test_unknown_mode_is_configuration_error() {
        let err = FormatterConfig::from_toml_str("[formatter]\ntime_format = \"roman\"\n").unwrap_err();
        assert!(matches!(err, FormatterError::Configuration(_)));
    }

    #[test]
    fn test_bad_zone_rejected_on_build() {
        let config = FormatterConfig::from_toml_str("[formatter]\ntime_zone = \"Nowhere/City\"\n").unwrap();
        assert_eq!(
            config.into_formatter(),
            Err(FormatterError::UnknownTimeZone("Nowhere/City".to_string()))
        );
    }
}
