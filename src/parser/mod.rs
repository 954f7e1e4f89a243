/// Punchcard entry parser
///
/// Reads clock times out of a line of free-form entry text. The cursor keeps
/// track of what has been consumed so the session can skip junk between
/// tokens and resynchronise after a bad one.
pub mod cursor;
pub mod time_token;

pub use cursor::{InputCursor, ScanOutcome};
pub use time_token::{parse_time, parse_time_str, InvalidTime, ParseOutcome, TimeViolation};
