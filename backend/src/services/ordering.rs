//! Canonical ordering of discovered buckets.

use log::{debug, trace};

use super::discovery::{Buckets, NamedDuration, NamedTimestamp};
use crate::models::TimeQuantity;

/// Durations at or below this magnitude are not elapsed times (they are
/// quantities in coarser units such as minutes) and are dropped.
pub const DURATION_THRESHOLD_MILLIS: f64 = 1_000.0;

/// Sort events by instant, earliest first. Ties keep discovery order.
pub fn sort_timestamps(timestamps: &mut [NamedTimestamp]) {
    timestamps.sort_by_key(|entry| entry.value);
}

/// Keep durations longer than one second and sort them by magnitude.
/// Values too large to decompose into hours are dropped. Ties keep
/// discovery order.
pub fn filter_and_sort_durations(durations: Vec<NamedDuration>) -> Vec<NamedDuration> {
    let mut kept: Vec<NamedDuration> = durations
        .into_iter()
        .filter(|entry| {
            let keep = entry.millis.abs() > DURATION_THRESHOLD_MILLIS;
            if !keep {
                trace!("Dropping {} ({} ms) below threshold", entry.label, entry.millis);
                return false;
            }
            if TimeQuantity::try_from_millis_f64(entry.millis).is_none() {
                debug!("Dropping {} ({} ms): not representable", entry.label, entry.millis);
                return false;
            }
            true
        })
        .collect();
    kept.sort_by(|a, b| a.millis.abs().total_cmp(&b.millis.abs()));
    kept
}

/// Order all buckets. The unavailable bucket keeps discovery order.
pub fn order_buckets(buckets: Buckets) -> Buckets {
    let Buckets {
        mut timestamps,
        durations,
        unavailable,
    } = buckets;
    sort_timestamps(&mut timestamps);
    Buckets {
        timestamps,
        durations: filter_and_sort_durations(durations),
        unavailable,
    }
}
