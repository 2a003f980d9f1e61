use crate::model::Reading;

/// Outcome of comparing two consecutive readings of one device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntervalRate {
    /// Fraction of the battery consumed per hour. Never negative.
    PerHour(f64),
    /// The interval carries no discharge signal.
    NotApplicable(Exclusion),
}

/// Why an interval was left out of the consumption estimate.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Exclusion {
    /// The level rose between the readings, so the device was charged.
    Charging,
    /// Less than one whole hour separates the readings.
    NoElapsedHours,
}

impl IntervalRate {
    /// The hourly rate, if the interval was applicable.
    #[cfg(test)]
    pub fn per_hour(self) -> Option<f64> {
        match self {
            IntervalRate::PerHour(rate) => Some(rate),
            IntervalRate::NotApplicable(_) => None,
        }
    }
}

/// Estimates the hourly discharge rate between two readings of the same device.
///
/// `start` is expected to be taken no later than `end`. Elapsed time is
/// counted in whole hours, truncated, so readings less than an hour apart
/// yield [`Exclusion::NoElapsedHours`]. An `end` earlier than `start` is
/// treated the same way.
///
/// # Example
///
/// ```no_run
/// // 1.0 at 10:00, 0.8 at 12:00
/// assert_eq!(estimate(&start, &end).per_hour(), Some(0.1));
/// ```
pub fn estimate(start: &Reading, end: &Reading) -> IntervalRate {
    if end.battery_level > start.battery_level {
        return IntervalRate::NotApplicable(Exclusion::Charging);
    }

    let hours = elapsed_hours(start, end);
    if hours <= 0 {
        return IntervalRate::NotApplicable(Exclusion::NoElapsedHours);
    }

    IntervalRate::PerHour((start.battery_level - end.battery_level) / hours as f64)
}

/// Whole hours between the two readings, truncated toward zero.
fn elapsed_hours(start: &Reading, end: &Reading) -> i64 {
    end.taken_at.signed_duration_since(start.taken_at).num_hours()
}
