//! Parsing of a single `H[H]:MM[am|pm]` time token.
//!
//! The shape is read leniently (blanks around the colon, a sign on either
//! number, any single character as the meridiem) and the values are then
//! checked strictly. Every failed check is reported, not just the first.

use super::cursor::InputCursor;
use crate::timecard::{ClockTime, Meridiem};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static TIME_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]*([+-]?[0-9]+)[ \t]*:[ \t]*([+-]?[0-9]+)[ \t]*([^\s])?")
        .expect("time token pattern is valid")
});

/// One failed check on a time token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeViolation {
    #[error("HOUR TOO SMALL: \"{0}\", should be greater than 0.")]
    HourTooSmall(i32),
    #[error("HOUR TOO BIG: \"{0}\", should be less than 13.")]
    HourTooBig(i32),
    #[error("MINUTE TOO SMALL: \"{0}\", should be greater than -1.")]
    MinuteTooSmall(i32),
    #[error("MINUTE TOO BIG: \"{0}\", should be less than 60.")]
    MinuteTooBig(i32),
    #[error("UNRECOGNIZED MERIDIEM: \"{}m\", should be \"am\" or \"pm\".", .0.map(String::from).unwrap_or_default())]
    UnrecognizedMeridiem(Option<char>),
    #[error("MALFORMED TIME: \"{0}\", should look like HH:MMam or HH:MMpm.")]
    Malformed(String),
    #[error("MISSING TIME: expected a time before the end of the line.")]
    MissingTime,
}

/// A token that could not become a [`ClockTime`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time \"{raw}\"")]
pub struct InvalidTime {
    /// The text the parser looked at
    pub raw: String,
    /// Never empty
    pub violations: Vec<TimeViolation>,
}

pub type ParseOutcome = Result<ClockTime, InvalidTime>;

/// Read one time token from the cursor.
///
/// On success the cursor sits right after the meridiem letter; anything that
/// follows (the `m` of `pm`, junk before a `-`) is left for the caller to skip.
pub fn parse_time(cursor: &mut InputCursor<'_>) -> ParseOutcome {
    let rest = cursor.remaining();
    let Some(caps) = TIME_TOKEN_RE.captures(rest) else {
        let raw = rest.lines().next().unwrap_or_default().trim().to_string();
        debug!("Time token has no HH:MM shape: {:?}", raw);
        let violation = if raw.is_empty() {
            TimeViolation::MissingTime
        } else {
            TimeViolation::Malformed(raw.clone())
        };
        return Err(InvalidTime { violations: vec![violation], raw });
    };

    let whole = &caps[0];
    cursor.advance(whole.len());

    let hour = parse_saturating(&caps[1]);
    let minute = parse_saturating(&caps[2]);
    let letter = caps.get(3).and_then(|m| m.as_str().chars().next());
    let meridiem = letter.and_then(Meridiem::from_letter);

    let violations = check_ranges(hour, minute, letter, meridiem);
    let raw = whole.trim().to_string();
    debug!("Parsed time token {:?}: hour={} minute={} meridiem={:?}", raw, hour, minute, letter);

    let time = match (u8::try_from(hour), u8::try_from(minute), meridiem) {
        (Ok(hour), Ok(minute), Some(meridiem)) if violations.is_empty() => {
            ClockTime::new(hour, minute, meridiem)
        }
        _ => None,
    };
    time.ok_or(InvalidTime { raw, violations })
}

/// Parse a standalone token such as `"9:30am"` or `" 12:00 PM "`.
pub fn parse_time_str(token: &str) -> ParseOutcome {
    parse_time(&mut InputCursor::new(token))
}

fn check_ranges(
    hour: i32,
    minute: i32,
    letter: Option<char>,
    meridiem: Option<Meridiem>,
) -> Vec<TimeViolation> {
    let mut violations = Vec::new();
    if hour <= 0 {
        violations.push(TimeViolation::HourTooSmall(hour));
    }
    if hour >= 13 {
        violations.push(TimeViolation::HourTooBig(hour));
    }
    if minute <= -1 {
        violations.push(TimeViolation::MinuteTooSmall(minute));
    }
    if minute >= 60 {
        violations.push(TimeViolation::MinuteTooBig(minute));
    }
    if meridiem.is_none() {
        violations.push(TimeViolation::UnrecognizedMeridiem(
            letter.map(|c| c.to_ascii_lowercase()),
        ));
    }
    violations
}

/// Integers too large for `i32` clamp to its bounds so they still fail the
/// range checks with a sensible value.
fn parse_saturating(digits: &str) -> i32 {
    digits.parse().unwrap_or(if digits.starts_with('-') { i32::MIN } else { i32::MAX })
}
