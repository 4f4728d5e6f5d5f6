#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use zmanim_json::models::{Accessor, AccessorValue, CalendarKind, CalendarSource, GeoLocation};

/// Calendar with a fixed, hand-written query registry.
pub struct FixtureCalendar {
    pub kind: CalendarKind,
    pub also_kinds: Vec<CalendarKind>,
    pub date: NaiveDate,
    pub geo: GeoLocation,
    pub calculator: String,
    pub type_name: Option<String>,
    pub queries: Vec<(&'static str, AccessorValue)>,
    pub parameterized: Vec<&'static str>,
}

impl FixtureCalendar {
    pub fn new(kind: CalendarKind, geo: GeoLocation, date: NaiveDate) -> Self {
        Self {
            kind,
            also_kinds: Vec::new(),
            date,
            geo,
            calculator: "US Naval Almanac Algorithm".to_string(),
            type_name: None,
            queries: Vec::new(),
            parameterized: Vec::new(),
        }
    }

    pub fn with(mut self, name: &'static str, value: impl Into<AccessorValue>) -> Self {
        self.queries.push((name, value.into()));
        self
    }

    pub fn also_kind(mut self, kind: CalendarKind) -> Self {
        self.also_kinds.push(kind);
        self
    }

    pub fn with_parameterized(mut self, name: &'static str) -> Self {
        self.parameterized.push(name);
        self
    }
}

impl CalendarSource for FixtureCalendar {
    fn kind(&self) -> CalendarKind {
        self.kind
    }

    fn kinds(&self) -> Vec<CalendarKind> {
        let mut kinds = vec![self.kind];
        kinds.extend(&self.also_kinds);
        kinds
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn geo_location(&self) -> &GeoLocation {
        &self.geo
    }

    fn calculator_name(&self) -> &str {
        &self.calculator
    }

    fn type_name(&self) -> &str {
        self.type_name
            .as_deref()
            .unwrap_or_else(|| self.output_kind().type_name())
    }

    fn accessors(&self) -> Vec<Accessor<'_>> {
        let mut accessors: Vec<Accessor<'_>> = self
            .queries
            .iter()
            .map(|(name, value)| Accessor::nullary(*name, move || value.clone()))
            .collect();
        for name in &self.parameterized {
            accessors.push(Accessor::parameterized(*name, 1));
        }
        accessors
    }
}

pub fn lakewood() -> GeoLocation {
    GeoLocation::new(
        Some("Lakewood, NJ".to_string()),
        40.0721087,
        -74.2400243,
        15.0,
        Tz::America__New_York,
    )
    .unwrap()
}

pub fn jerusalem() -> GeoLocation {
    GeoLocation::new(
        Some("Jerusalem".to_string()),
        31.778,
        35.2354,
        754.0,
        Tz::Asia__Jerusalem,
    )
    .unwrap()
}

pub fn greenwich() -> GeoLocation {
    GeoLocation::new(None, 51.4769, 0.0, 0.0, Tz::Europe__London).unwrap()
}

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
