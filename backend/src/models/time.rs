use serde::*;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Elapsed time split into sexagesimal components.
///
/// Hours are unbounded: a temporal hour or a multi-day span can exceed 24.
/// The sign is kept apart from the components, which are always magnitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeQuantity {
    hours: u64,
    minutes: u32,
    seconds: u32,
    milliseconds: u32,
    negative: bool,
}

impl TimeQuantity {
    /// Largest representable magnitude.
    pub const MAX: TimeQuantity = TimeQuantity {
        hours: u64::MAX,
        minutes: 59,
        seconds: 59,
        milliseconds: 999,
        negative: false,
    };

    /// Decompose a signed millisecond duration.
    pub fn from_millis(millis: i64) -> Self {
        let abs = millis.unsigned_abs();
        Self {
            hours: abs / MILLIS_PER_HOUR,
            minutes: (abs / MILLIS_PER_MINUTE % 60) as u32,
            seconds: (abs / MILLIS_PER_SECOND % 60) as u32,
            milliseconds: (abs % MILLIS_PER_SECOND) as u32,
            negative: millis < 0,
        }
    }

    /// Decompose a floating point millisecond duration, truncating the
    /// fractional millisecond toward zero. Non-finite input yields zero and
    /// magnitudes whose hours do not fit in a `u64` saturate to [`Self::MAX`].
    pub fn from_millis_f64(millis: f64) -> Self {
        if !millis.is_finite() {
            return Self::default();
        }
        Self::try_from_millis_f64(millis).unwrap_or(Self {
            negative: millis < 0.0,
            ..Self::MAX
        })
    }

    /// Like [`Self::from_millis_f64`], but `None` for non-finite input and
    /// for magnitudes too large to represent.
    pub fn try_from_millis_f64(millis: f64) -> Option<Self> {
        if !millis.is_finite() {
            return None;
        }
        let magnitude = millis.trunc().abs();
        if magnitude >= u128::MAX as f64 {
            return None;
        }
        Self::from_magnitude(magnitude as u128, millis < 0.0)
    }

    /// Build a quantity from components, normalizing overflowing minutes,
    /// seconds and milliseconds into the larger units. Saturates to
    /// [`Self::MAX`] when the carried hours overflow.
    pub fn new(hours: u64, minutes: u32, seconds: u32, milliseconds: u32, negative: bool) -> Self {
        Self::try_new(hours, minutes, seconds, milliseconds, negative)
            .unwrap_or(Self { negative, ..Self::MAX })
    }

    /// Like [`Self::new`], but `None` when the carried hours overflow.
    pub fn try_new(
        hours: u64,
        minutes: u32,
        seconds: u32,
        milliseconds: u32,
        negative: bool,
    ) -> Option<Self> {
        let total = hours as u128 * MILLIS_PER_HOUR as u128
            + minutes as u128 * MILLIS_PER_MINUTE as u128
            + seconds as u128 * MILLIS_PER_SECOND as u128
            + milliseconds as u128;
        Self::from_magnitude(total, negative)
    }

    fn from_magnitude(total: u128, negative: bool) -> Option<Self> {
        let hours = u64::try_from(total / MILLIS_PER_HOUR as u128).ok()?;
        let rest = (total % MILLIS_PER_HOUR as u128) as u64;
        let mut quantity = Self {
            hours,
            minutes: (rest / MILLIS_PER_MINUTE) as u32,
            seconds: (rest / MILLIS_PER_SECOND % 60) as u32,
            milliseconds: (rest % MILLIS_PER_SECOND) as u32,
            negative,
        };
        if quantity.is_zero() {
            quantity.negative = false;
        }
        Some(quantity)
    }

    pub fn hours(&self) -> u64 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn milliseconds(&self) -> u32 {
        self.milliseconds
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True when every component is zero.
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.milliseconds == 0
    }

    /// Signed millisecond value this quantity was built from.
    pub fn to_millis(&self) -> i128 {
        let magnitude = self.hours as i128 * MILLIS_PER_HOUR as i128
            + self.minutes as i128 * MILLIS_PER_MINUTE as i128
            + self.seconds as i128 * MILLIS_PER_SECOND as i128
            + self.milliseconds as i128;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl From<i64> for TimeQuantity {
    fn from(millis: i64) -> Self {
        TimeQuantity::from_millis(millis)
    }
}

impl From<f64> for TimeQuantity {
    fn from(millis: f64) -> Self {
        TimeQuantity::from_millis_f64(millis)
    }
}

impl From<chrono::TimeDelta> for TimeQuantity {
    fn from(delta: chrono::TimeDelta) -> Self {
        TimeQuantity::from_millis(delta.num_milliseconds())
    }
}
