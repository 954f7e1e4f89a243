//! Text written back to the user.

use crate::session::{AbortReason, SessionOutcome, SessionReport, WorkedPair};
use crate::timecard::{round_duration, ClockTime, DaySummary};
use std::io::{self, Write};

pub const BANNER: &str = "\nWelcome to PUNCHCARD! This program is meant to help you record your work hours\n\
as an employee. To get started, just enter your start time and end time, in the\n\
format HH:MMcc-HH:MMcc. For example, if you worked from noon to 3pm today, you'd\n\
enter 12:00pm-3:00pm. Several pairs worked on the same day can be entered on one\n\
line, separated by commas (9:00am-12:00pm, 1:00pm-5:00pm). You can quit the\n\
program by pressing Ctrl + C, closing the input, or entering a start time and end\n\
time that are identical (such as 1:00pm-1:00pm).\n";

/// Controls which optional lines are written
#[derive(Debug, Clone, Copy)]
pub struct ReportStyle {
    /// Echo START/END for every pair
    pub echo_pairs: bool,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self { echo_pairs: true }
    }
}

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER)
}

pub fn write_pair<W: Write>(out: &mut W, pair: &WorkedPair, style: ReportStyle) -> io::Result<()> {
    if style.echo_pairs {
        write_times(out, &pair.start, &pair.end)?;
    }
    writeln!(out, "ACTUAL TIME:\t{}.", pair.elapsed)
}

fn write_times<W: Write>(out: &mut W, start: &ClockTime, end: &ClockTime) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "START:\t{}", start)?;
    writeln!(out, "END:\t{}", end)
}

/// Day total and its quarter-hour rounding.
pub fn write_day_totals<W: Write>(out: &mut W, summary: &DaySummary) -> io::Result<()> {
    let actual = summary.total();
    let rounded = round_duration(actual);
    writeln!(out, "DAY TOTAL:\t{} ({:.2} hours).", actual, actual.decimal_hours())?;
    writeln!(out, "ROUNDED TIME:\t{:.2} hours.", rounded.decimal_hours())?;
    writeln!(out)
}

/// One `[ERROR]` line per failed check, then which side of the pair was bad.
pub fn write_abort<W: Write>(out: &mut W, reason: &AbortReason) -> io::Result<()> {
    match reason {
        AbortReason::InvalidTime { error, .. } => {
            for violation in &error.violations {
                writeln!(out, "[ERROR]\t{}", violation)?;
            }
        }
        AbortReason::MissingEndTime => writeln!(out, "[ERROR]\t{}", reason)?,
    }
    writeln!(out, "Something was wrong with your given {} time!", reason.side())
}

/// Render a whole session: its pairs, then whatever ended it.
pub fn write_session<W: Write>(
    out: &mut W,
    report: &SessionReport,
    style: ReportStyle,
) -> io::Result<()> {
    for pair in &report.pairs {
        write_pair(out, pair, style)?;
    }
    match &report.outcome {
        SessionOutcome::AllPairsRead { summary, .. } => write_day_totals(out, summary),
        SessionOutcome::StopRequested { at } => {
            if style.echo_pairs {
                write_times(out, at, at)?;
            }
            Ok(())
        }
        SessionOutcome::AbortRequested(reason) => write_abort(out, reason),
        SessionOutcome::StreamEnded => Ok(()),
    }
}
