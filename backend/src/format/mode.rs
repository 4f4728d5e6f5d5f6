//! Time format modes and their rendering settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a duration or time of day is rendered.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatMode {
    /// `HH:MM:SS.s`, hours zero padded, XSD canonical fraction
    ///
    /// Same fields as the millis form, but the fraction drops trailing zeros
    /// (`00:00:01.5`, zero is `00:00:00.0`) instead of always using 3 digits.
    #[default]
    SexagesimalXsd,
    /// Decimal mode, rendered with the plain `H:MM` settings
    Decimal,
    /// `H:MM`
    Sexagesimal,
    /// `H:MM:SS`
    SexagesimalSeconds,
    /// `H:MM:SS.mmm`
    SexagesimalMillis,
    /// `PT1H30M` style durations
    XsdDuration,
}

/// Settings triple driving sexagesimal rendering.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeFormatSettings {
    pub prepend_zero_hours: bool,
    pub use_seconds: bool,
    pub use_millis: bool,
}

impl TimeFormatSettings {
    const fn new(prepend_zero_hours: bool, use_seconds: bool, use_millis: bool) -> Self {
        Self {
            prepend_zero_hours,
            use_seconds,
            use_millis,
        }
    }
}

const MODE_SETTINGS: [(FormatMode, TimeFormatSettings); 5] = [
    (FormatMode::SexagesimalXsd, TimeFormatSettings::new(true, true, true)),
    (FormatMode::Decimal, TimeFormatSettings::new(false, false, false)),
    (FormatMode::Sexagesimal, TimeFormatSettings::new(false, false, false)),
    (FormatMode::SexagesimalSeconds, TimeFormatSettings::new(false, true, false)),
    (FormatMode::SexagesimalMillis, TimeFormatSettings::new(false, true, true)),
];

impl FormatMode {
    pub const ALL: [FormatMode; 6] = [
        FormatMode::SexagesimalXsd,
        FormatMode::Decimal,
        FormatMode::Sexagesimal,
        FormatMode::SexagesimalSeconds,
        FormatMode::SexagesimalMillis,
        FormatMode::XsdDuration,
    ];

    /// Settings for this mode. `None` for [`FormatMode::XsdDuration`], which
    /// always goes through the XSD duration encoder.
    pub fn settings(self) -> Option<TimeFormatSettings> {
        MODE_SETTINGS
            .iter()
            .find(|(mode, _)| *mode == self)
            .map(|(_, settings)| *settings)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormatMode::SexagesimalXsd => "sexagesimal_xsd",
            FormatMode::Decimal => "decimal",
            FormatMode::Sexagesimal => "sexagesimal",
            FormatMode::SexagesimalSeconds => "sexagesimal_seconds",
            FormatMode::SexagesimalMillis => "sexagesimal_millis",
            FormatMode::XsdDuration => "xsd_duration",
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        FormatMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| format!("Unknown time format '{}'", s))
    }
}
