//! Elapsed time between two clock readings and the per-day running total.

use super::clock::{LinearTime, MINUTES_PER_DAY};
use std::fmt;

/// Hours and minutes worked, normalized so `minutes < 60`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration {
    pub hours: u32,
    pub minutes: u32,
}

impl Duration {
    /// Split a minute count into hours and leftover minutes.
    pub fn from_minutes(total: u32) -> Self {
        Self { hours: total / 60, minutes: total % 60 }
    }

    /// Hours as a fraction, e.g. 6h30m is 6.5
    pub fn decimal_hours(&self) -> f64 {
        f64::from(self.hours) + f64::from(self.minutes) / 60.0
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} hours and {:02} minutes", self.hours, self.minutes)
    }
}

/// Time from `start` to `end`. An `end` earlier than `start` is taken to be
/// on the following day.
///
/// Equal inputs give a zero duration; callers that treat an identical pair as
/// the stop signal must check for it before calling this.
pub fn elapsed(start: LinearTime, end: LinearTime) -> Duration {
    let (start, end) = (start.minutes(), end.minutes());
    let total = if end >= start { end - start } else { end + MINUTES_PER_DAY - start };
    Duration::from_minutes(total)
}

/// Running total for one day of entries.
///
/// Totals may exceed 24 hours when a day holds several long pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DaySummary {
    pub total_hours: u32,
    pub total_minutes: u32,
}

impl DaySummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pair's duration, carrying whole hours out of the minutes.
    pub fn add(&mut self, duration: Duration) {
        self.total_hours += duration.hours;
        self.total_minutes += duration.minutes;
        if self.total_minutes >= 60 {
            self.total_hours += self.total_minutes / 60;
            self.total_minutes %= 60;
        }
    }

    pub fn total(&self) -> Duration {
        Duration { hours: self.total_hours, minutes: self.total_minutes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timecard::clock::{ClockTime, Meridiem};

    fn linear(hour: u8, minute: u8, meridiem: Meridiem) -> LinearTime {
        ClockTime::new(hour, minute, meridiem).unwrap().to_linear()
    }

    #[test]
    fn test_elapsed_same_day() {
        let start = linear(9, 10, Meridiem::Am);
        let end = linear(5, 12, Meridiem::Pm);
        assert_eq!(elapsed(start, end), Duration { hours: 8, minutes: 2 });
    }

    #[test]
    fn test_elapsed_wraps_past_midnight() {
        let start = linear(11, 59, Meridiem::Pm);
        let end = linear(12, 1, Meridiem::Am);
        assert_eq!(elapsed(start, end), Duration { hours: 0, minutes: 2 });

        let start = linear(8, 0, Meridiem::Pm);
        let end = linear(7, 59, Meridiem::Pm);
        assert_eq!(elapsed(start, end), Duration { hours: 23, minutes: 59 });
    }

    #[test]
    fn test_elapsed_identical_is_zero() {
        for (hour, meridiem) in [(12, Meridiem::Am), (1, Meridiem::Pm), (11, Meridiem::Pm)] {
            let x = linear(hour, 0, meridiem);
            assert_eq!(elapsed(x, x), Duration::default());
        }
    }

    #[test]
    fn test_summary_carries_minutes_into_hours() {
        let mut summary = DaySummary::new();
        summary.add(Duration { hours: 1, minutes: 40 });
        summary.add(Duration { hours: 0, minutes: 45 });
        assert_eq!(summary.total(), Duration { hours: 2, minutes: 25 });
    }

    #[test]
    fn test_summary_can_exceed_a_day() {
        let mut summary = DaySummary::new();
        summary.add(Duration { hours: 23, minutes: 59 });
        summary.add(Duration { hours: 23, minutes: 59 });
        assert_eq!(summary.total(), Duration { hours: 47, minutes: 58 });
    }

    #[test]
    fn test_display_and_decimal() {
        let d = Duration { hours: 8, minutes: 0 };
        assert_eq!(d.to_string(), "08 hours and 00 minutes");
        assert_eq!(format!("{:.2}", Duration { hours: 6, minutes: 30 }.decimal_hours()), "6.50");
    }
}
