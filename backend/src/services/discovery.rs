//! Accessor discovery and classification.
//!
//! Walks a calendar's query registry, invokes every eligible query once and
//! sorts the results into timestamp, duration and unavailable buckets.

use chrono::{DateTime, Utc};
use log::debug;

use crate::models::{Accessor, AccessorValue, CalendarSource};

/// Registered names that are never enumerated: general-purpose accessors and
/// variant forms of other events.
pub const EXCLUDED_ACCESSORS: [&str; 8] = [
    "getAdjustedDate",
    "getDate",
    "getElevationAdjustedSunrise",
    "getElevationAdjustedSunset",
    "getMidnightLastNight",
    "getMidnightTonight",
    "getSunriseBaalHatanya",
    "getSunsetBaalHatanya",
];

const ACCESSOR_PREFIX: &str = "get";

/// One calendar event.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTimestamp {
    pub label: String,
    pub value: DateTime<Utc>,
}

/// One elapsed-time quantity in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedDuration {
    pub label: String,
    pub millis: f64,
}

/// Classified results, in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buckets {
    pub timestamps: Vec<NamedTimestamp>,
    pub durations: Vec<NamedDuration>,
    pub unavailable: Vec<String>,
}

/// Whether a registered accessor takes part in output assembly.
pub fn is_eligible(accessor: &Accessor<'_>) -> bool {
    accessor.name().starts_with(ACCESSOR_PREFIX)
        && accessor.arity() == 0
        && !EXCLUDED_ACCESSORS.contains(&accessor.name())
}

/// Output label for an accessor name: the name without its `get` prefix.
pub fn label_for(name: &str) -> &str {
    name.strip_prefix(ACCESSOR_PREFIX).unwrap_or(name)
}

/// Invoke every eligible accessor of `source` and classify the results.
pub fn discover(source: &dyn CalendarSource) -> Buckets {
    let mut buckets = Buckets::default();

    for accessor in source.accessors() {
        if !is_eligible(&accessor) {
            debug!(
                "Skipping accessor {} (arity {})",
                accessor.name(),
                accessor.arity()
            );
            continue;
        }
        let Some(value) = accessor.invoke() else {
            continue;
        };
        let label = label_for(accessor.name()).to_string();
        match value {
            AccessorValue::Timestamp(value) => {
                buckets.timestamps.push(NamedTimestamp { label, value })
            }
            AccessorValue::Number(millis) => {
                buckets.durations.push(NamedDuration { label, millis })
            }
            AccessorValue::Unavailable => buckets.unavailable.push(label),
            AccessorValue::Unsupported(type_name) => {
                debug!("Ignoring {} result of type {}", accessor.name(), type_name);
            }
        }
    }

    buckets
}
