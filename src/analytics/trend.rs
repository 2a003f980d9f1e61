use crate::model::Reading;

use super::interval::{estimate, IntervalRate};

const HOURS_PER_DAY: f64 = 24.0;

/// Stable chronological view over one device's readings.
///
/// Readings may arrive in any order. Equal timestamps keep their input
/// order and the caller's slice is left untouched.
pub fn chronological<'a, I>(readings: I) -> Vec<&'a Reading>
where
    I: IntoIterator<Item = &'a Reading>,
{
    let mut sorted: Vec<&Reading> = readings.into_iter().collect();
    sorted.sort_by_key(|reading| reading.taken_at);
    sorted
}

/// Average daily battery consumption for one device.
///
/// Takes the view produced by [`chronological`]. Each consecutive pair is
/// fed to [`estimate`], charging and sub-hour intervals are skipped, and
/// the mean hourly rate of the remaining intervals is projected to 24 hours.
///
/// # Returns
/// - `Some(rate)` as a fraction of a full battery per day
/// - `None` with fewer than two readings or no applicable interval
pub fn aggregate(sorted: &[&Reading]) -> Option<f64> {
    if sorted.len() <= 1 {
        return None;
    }

    let (total, intervals) = sorted
        .windows(2)
        .fold((0.0, 0usize), |(total, intervals), pair| {
            match estimate(pair[0], pair[1]) {
                IntervalRate::PerHour(rate) => (total + rate, intervals + 1),
                IntervalRate::NotApplicable(reason) => {
                    tracing::trace!(
                        device = %pair[1].device_serial,
                        ?reason,
                        "Skipping interval"
                    );
                    (total, intervals)
                }
            }
        });

    if intervals == 0 {
        return None;
    }

    Some(total / intervals as f64 * HOURS_PER_DAY)
}
