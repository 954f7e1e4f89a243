//! Quarter-hour payroll rounding.

use super::duration::Duration;

/// Rounding step in minutes
pub const QUARTER_HOUR: u32 = 15;

/// Round `minutes` to the nearest quarter hour, carrying into `hours` when the
/// result reaches 60.
///
/// The cut-over sits between 7 and 8 minutes past each quarter: 0..=7 round
/// down, 8..=22 round to 15, and so on. `minutes` above 59 are accepted and
/// carried as well.
pub fn round(hours: u32, minutes: u32) -> Duration {
    let rounded = (minutes + 7) / QUARTER_HOUR * QUARTER_HOUR;
    Duration { hours: hours + rounded / 60, minutes: rounded % 60 }
}

/// `hours + minutes / 60` as a float, for two-decimal display.
pub fn to_decimal_hours(hours: u32, minutes: u32) -> f64 {
    Duration { hours, minutes }.decimal_hours()
}

/// Round a whole duration.
pub fn round_duration(duration: Duration) -> Duration {
    round(duration.hours, duration.minutes)
}
