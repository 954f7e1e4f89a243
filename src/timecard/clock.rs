//! Twelve-hour clock values and their linear (minutes since midnight) form.

use std::fmt;

/// Minutes in a full day; linear times live in `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// The AM/PM half of a twelve-hour clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Resolve a meridiem letter. Case-insensitive; only `a` and `p` are accepted.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'a' => Some(Meridiem::Am),
            'p' => Some(Meridiem::Pm),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Meridiem::Am => 'a',
            Meridiem::Pm => 'p',
        }
    }
}

/// A validated twelve-hour time of day.
///
/// Fields are private so a value can only come from [`ClockTime::new`], which
/// the token parser calls once every range check has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl ClockTime {
    /// Build a clock time, returning `None` when hour is outside 1..=12 or
    /// minute outside 0..=59.
    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Option<Self> {
        if (1..=12).contains(&hour) && minute < 60 {
            Some(Self { hour, minute, meridiem })
        } else {
            None
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Convert to minutes since midnight.
    ///
    /// 12 AM is midnight (0) and 12 PM is noon (720); every other hour adds
    /// 720 minutes when it falls in the PM half.
    pub fn to_linear(&self) -> LinearTime {
        let base = match (self.hour, self.meridiem) {
            (12, Meridiem::Am) => 0,
            (12, Meridiem::Pm) => 720,
            (hour, Meridiem::Am) => u32::from(hour) * 60,
            (hour, Meridiem::Pm) => u32::from(hour) * 60 + 720,
        };
        LinearTime(base + u32::from(self.minute))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}{}m", self.hour, self.minute, self.meridiem.letter())
    }
}

/// Minutes since midnight, always below [`MINUTES_PER_DAY`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LinearTime(u32);

impl LinearTime {
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl From<ClockTime> for LinearTime {
    fn from(time: ClockTime) -> Self {
        time.to_linear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    fn clock(hour: u8, minute: u8, meridiem: Meridiem) -> ClockTime {
        ClockTime::new(hour, minute, meridiem).unwrap()
    }

    #[test_case(12, 0, Meridiem::Am, 0 ; "midnight")]
    #[test_case(12, 30, Meridiem::Am, 30 ; "half past midnight")]
    #[test_case(1, 0, Meridiem::Am, 60 ; "one am")]
    #[test_case(11, 59, Meridiem::Am, 719 ; "last minute of morning")]
    #[test_case(12, 0, Meridiem::Pm, 720 ; "noon")]
    #[test_case(5, 0, Meridiem::Pm, 1020 ; "five pm")]
    #[test_case(11, 59, Meridiem::Pm, 1439 ; "last minute of day")]
    fn test_to_linear(hour: u8, minute: u8, meridiem: Meridiem, expected: u32) {
        assert_eq!(clock(hour, minute, meridiem).to_linear().minutes(), expected);
    }

    #[test]
    fn test_to_linear_is_injective_and_total() {
        let mut seen = HashSet::new();
        for meridiem in [Meridiem::Am, Meridiem::Pm] {
            for hour in 1..=12 {
                for minute in 0..60 {
                    let linear = clock(hour, minute, meridiem).to_linear().minutes();
                    assert!(linear < MINUTES_PER_DAY);
                    assert!(seen.insert(linear), "duplicate linear time {}", linear);
                }
            }
        }
        assert_eq!(seen.len(), MINUTES_PER_DAY as usize);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(ClockTime::new(0, 0, Meridiem::Am).is_none());
        assert!(ClockTime::new(13, 0, Meridiem::Pm).is_none());
        assert!(ClockTime::new(9, 60, Meridiem::Am).is_none());
    }

    #[test]
    fn test_display_is_zero_padded_lowercase() {
        assert_eq!(clock(9, 5, Meridiem::Am).to_string(), "09:05am");
        assert_eq!(clock(12, 0, Meridiem::Pm).to_string(), "12:00pm");
    }

    #[test]
    fn test_meridiem_from_letter() {
        assert_eq!(Meridiem::from_letter('A'), Some(Meridiem::Am));
        assert_eq!(Meridiem::from_letter('p'), Some(Meridiem::Pm));
        assert_eq!(Meridiem::from_letter('x'), None);
    }
}
