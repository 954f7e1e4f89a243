//! One day of time entry.
//!
//! A day is a line of comma-separated `start-end` pairs. Each pair is parsed,
//! echoed and added to the day's total. An identical start and end anywhere on
//! the line asks the whole program to stop; any bad time throws the day away.

use crate::parser::{parse_time, InputCursor, InvalidTime, ScanOutcome};
use crate::timecard::{elapsed, ClockTime, DaySummary, Duration};
use log::{debug, info, warn};
use std::fmt;
use thiserror::Error;

/// Which half of a pair a message is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairSide {
    Start,
    End,
}

impl fmt::Display for PairSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairSide::Start => write!(f, "start"),
            PairSide::End => write!(f, "end"),
        }
    }
}

/// Why a day's entry was thrown away
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbortReason {
    #[error("invalid {side} time: {error}")]
    InvalidTime { side: PairSide, error: InvalidTime },
    #[error("MISSING END TIME: expected \"-\" before the end of the line.")]
    MissingEndTime,
}

impl AbortReason {
    /// The half of the pair that caused the abort
    pub fn side(&self) -> PairSide {
        match self {
            AbortReason::InvalidTime { side, .. } => *side,
            AbortReason::MissingEndTime => PairSide::End,
        }
    }
}

/// A pair that was read and counted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkedPair {
    pub start: ClockTime,
    pub end: ClockTime,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every pair on the line was counted. `input_exhausted` is set when the
    /// text ended without a newline, so no further day can follow.
    AllPairsRead { summary: DaySummary, input_exhausted: bool },
    /// A pair with identical start and end was entered
    StopRequested { at: ClockTime },
    /// A time could not be read; the day must be entered again from scratch
    AbortRequested(AbortReason),
    /// The input ended with a pair still incomplete. Nothing from the line is
    /// totalled and no further day can follow.
    StreamEnded,
}

/// Everything a day's entry produced, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub pairs: Vec<WorkedPair>,
    pub outcome: SessionOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Reading,
    ParsingStart,
    ParsingEnd(ClockTime),
    Accumulating(ClockTime, ClockTime),
}

/// Runs the pair-by-pair state machine over one line of entry text
#[derive(Debug)]
pub struct DaySession<'a> {
    cursor: InputCursor<'a>,
    summary: DaySummary,
    pairs: Vec<WorkedPair>,
}

impl<'a> DaySession<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { cursor: InputCursor::new(line), summary: DaySummary::new(), pairs: Vec::new() }
    }

    /// Consume the session and process the whole line.
    pub fn run(mut self) -> SessionReport {
        let mut state = State::ParsingStart;
        let outcome = loop {
            state = match state {
                State::Reading => match self.cursor.scan_to(',') {
                    ScanOutcome::Delimiter => State::ParsingStart,
                    ScanOutcome::Newline => break self.finish(false),
                    ScanOutcome::EndOfInput => break self.finish(true),
                },
                State::ParsingStart | State::ParsingEnd(_) if self.at_stream_end() => {
                    break self.stream_ended();
                }
                State::ParsingStart => match parse_time(&mut self.cursor) {
                    Ok(start) => match self.cursor.scan_to('-') {
                        ScanOutcome::Delimiter => State::ParsingEnd(start),
                        ScanOutcome::Newline => break self.abort(AbortReason::MissingEndTime),
                        ScanOutcome::EndOfInput => break self.stream_ended(),
                    },
                    Err(error) => {
                        break self.abort(AbortReason::InvalidTime { side: PairSide::Start, error })
                    }
                },
                State::ParsingEnd(start) => match parse_time(&mut self.cursor) {
                    Ok(end) if end == start => {
                        info!("Identical start and end ({}), stopping", start);
                        break SessionOutcome::StopRequested { at: start };
                    }
                    Ok(end) => State::Accumulating(start, end),
                    Err(error) => {
                        break self.abort(AbortReason::InvalidTime { side: PairSide::End, error })
                    }
                },
                State::Accumulating(start, end) => {
                    let worked = elapsed(start.into(), end.into());
                    debug!("Pair {}-{} worked {}", start, end, worked);
                    self.summary.add(worked);
                    self.pairs.push(WorkedPair { start, end, elapsed: worked });
                    State::Reading
                }
            };
        };
        SessionReport { pairs: self.pairs, outcome }
    }

    fn finish(&self, input_exhausted: bool) -> SessionOutcome {
        info!("Day complete: {} pair(s), {}", self.pairs.len(), self.summary.total());
        SessionOutcome::AllPairsRead { summary: self.summary, input_exhausted }
    }

    /// Only blanks remain and no newline will ever come
    fn at_stream_end(&self) -> bool {
        let rest = self.cursor.remaining();
        !rest.contains('\n') && rest.trim().is_empty()
    }

    fn stream_ended(&self) -> SessionOutcome {
        info!("Input ended mid-entry; dropping {} pair(s)", self.pairs.len());
        SessionOutcome::StreamEnded
    }

    fn abort(&mut self, reason: AbortReason) -> SessionOutcome {
        warn!("Discarding day entry: {}", reason);
        // resynchronise on the next line; whatever is left of this one is junk
        self.cursor.scan_to('\n');
        SessionOutcome::AbortRequested(reason)
    }
}

/// Process one line of entry text.
pub fn run_day(line: &str) -> SessionReport {
    DaySession::new(line).run()
}
