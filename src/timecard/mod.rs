//! Pure time arithmetic: clock conversion, elapsed duration and rounding.

pub mod clock;
pub mod duration;
pub mod rounding;

pub use clock::{ClockTime, LinearTime, Meridiem, MINUTES_PER_DAY};
pub use duration::{elapsed, DaySummary, Duration};
pub use rounding::{round, round_duration, to_decimal_hours};
