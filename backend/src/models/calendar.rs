//! Collaborator contract for the calendar computation layer.
//!
//! Calendars describe themselves through [`CalendarSource`]: a handful of
//! identity accessors plus an ordered registry of named queries. The output
//! pipeline only ever talks to this trait, so any computation engine can be
//! plugged in by implementing it.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Declared kind of a calendar, from most general to most specialized.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CalendarKind {
    AstronomicalTimes,
    BasicZmanim,
    Zmanim,
}

impl CalendarKind {
    /// Kinds ordered most specific first.
    pub const BY_SPECIFICITY: [CalendarKind; 3] = [
        CalendarKind::Zmanim,
        CalendarKind::BasicZmanim,
        CalendarKind::AstronomicalTimes,
    ];

    /// Top-level key of the output document.
    pub fn output_key(self) -> &'static str {
        match self {
            CalendarKind::AstronomicalTimes => "AstronomicalTimes",
            CalendarKind::BasicZmanim => "BasicZmanim",
            CalendarKind::Zmanim => "Zmanim",
        }
    }

    /// Calendar type reported in metadata when the source does not override it.
    pub fn type_name(self) -> &'static str {
        match self {
            CalendarKind::AstronomicalTimes => "AstronomicalCalendar",
            CalendarKind::BasicZmanim => "ZmanimCalendar",
            CalendarKind::Zmanim => "ComplexZmanimCalendar",
        }
    }

    /// Pick the most specific kind among declared capabilities.
    ///
    /// A zmanim calendar is also an astronomical one, so a source may list
    /// several kinds; the output is keyed by the most specialized of them.
    pub fn resolve(declared: &[CalendarKind]) -> Option<CalendarKind> {
        Self::BY_SPECIFICITY
            .into_iter()
            .find(|kind| declared.contains(kind))
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.output_key())
    }
}

/// Observer location and its civil time zone.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    pub location_name: Option<String>,
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub longitude: f64,
    /// Elevation in meters above sea level
    pub elevation: f64,
    pub time_zone: Tz,
}

impl GeoLocation {
    pub fn new(
        location_name: Option<String>,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        time_zone: Tz,
    ) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        if elevation < 0.0 {
            return Err("Elevation cannot be negative".to_string());
        }
        Ok(Self {
            location_name,
            latitude,
            longitude,
            elevation,
            time_zone,
        })
    }
}

/// Result of invoking a calendar query.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessorValue {
    /// An absolute event time.
    Timestamp(DateTime<Utc>),
    /// A numeric quantity, usually milliseconds.
    Number(f64),
    /// The event does not occur for this date and place.
    Unavailable,
    /// A value of a type the output pipeline does not render.
    Unsupported(&'static str),
}

impl From<DateTime<Utc>> for AccessorValue {
    fn from(value: DateTime<Utc>) -> Self {
        AccessorValue::Timestamp(value)
    }
}

impl From<Option<DateTime<Utc>>> for AccessorValue {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(AccessorValue::Unavailable, AccessorValue::Timestamp)
    }
}

impl From<f64> for AccessorValue {
    fn from(value: f64) -> Self {
        AccessorValue::Number(value)
    }
}

impl From<i64> for AccessorValue {
    fn from(value: i64) -> Self {
        AccessorValue::Number(value as f64)
    }
}

impl From<Option<f64>> for AccessorValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(AccessorValue::Unavailable, AccessorValue::Number)
    }
}

type NullaryFn<'a> = Box<dyn Fn() -> AccessorValue + 'a>;

/// How a registered query is invoked.
enum Query<'a> {
    Nullary(NullaryFn<'a>),
    /// Needs arguments; the output pipeline never calls these.
    Parameterized { arity: usize },
}

/// A named query registered by a calendar.
pub struct Accessor<'a> {
    name: &'static str,
    query: Query<'a>,
}

impl<'a> Accessor<'a> {
    /// Register a zero-argument query.
    pub fn nullary<F, V>(name: &'static str, f: F) -> Self
    where
        F: Fn() -> V + 'a,
        V: Into<AccessorValue> + 'a,
    {
        Self {
            name,
            query: Query::Nullary(Box::new(move || -> AccessorValue { f().into() })),
        }
    }

    /// Register a query that needs `arity` arguments.
    pub fn parameterized(name: &'static str, arity: usize) -> Self {
        Self {
            name,
            query: Query::Parameterized { arity },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        match &self.query {
            Query::Nullary(_) => 0,
            Query::Parameterized { arity } => *arity,
        }
    }

    /// Invoke a zero-argument query; `None` for parameterized ones.
    pub fn invoke(&self) -> Option<AccessorValue> {
        match &self.query {
            Query::Nullary(f) => Some(f()),
            Query::Parameterized { .. } => None,
        }
    }
}

impl fmt::Debug for Accessor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .finish()
    }
}

/// A calendar whose results can be rendered into an output document.
///
/// Queries must be side-effect free; each eligible one is invoked once per
/// assembly.
pub trait CalendarSource {
    /// Primary declared kind.
    fn kind(&self) -> CalendarKind;

    /// Every kind this calendar can act as. Defaults to [`Self::kind`] alone.
    fn kinds(&self) -> Vec<CalendarKind> {
        vec![self.kind()]
    }

    /// Kind that keys the output document: the most specific of
    /// [`Self::kinds`], falling back to [`Self::kind`].
    fn output_kind(&self) -> CalendarKind {
        CalendarKind::resolve(&self.kinds()).unwrap_or_else(|| self.kind())
    }

    /// Civil date the calendar computes for.
    fn date(&self) -> NaiveDate;

    fn geo_location(&self) -> &GeoLocation;

    /// Name of the astronomical algorithm in use.
    fn calculator_name(&self) -> &str;

    /// Calendar type name for metadata.
    fn type_name(&self) -> &str {
        self.output_kind().type_name()
    }

    /// Ordered query registry.
    fn accessors(&self) -> Vec<Accessor<'_>>;
}
