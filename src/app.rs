use crate::config::Config;
use crate::report::{write_banner, write_session, ReportStyle};
use crate::session::{run_day, SessionOutcome};
use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, Write};

const EDITOR_PROMPT: &str = "> ";

/// Where day entries come from
pub trait LineSource {
    /// Next line of input including its trailing newline, or `None` once the
    /// input is finished.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Interactive terminal input with line editing and history
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("Failed to start line editor")?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self) -> Result<Option<String>> {
        let read = self.editor.readline(EDITOR_PROMPT);
        if let Ok(line) = &read {
            let _ = self.editor.add_history_entry(line.as_str());
        }
        editor_line(read)
    }
}

/// Map a line editor result to an entry line. Interrupts and end-of-file end
/// the input; they are logged rather than written to the output.
fn editor_line(read: rustyline::Result<String>) -> Result<Option<String>> {
    match read {
        Ok(line) => Ok(Some(line + "\n")),
        Err(ReadlineError::Interrupted) => {
            log::info!("CTRL-C");
            Ok(None)
        }
        Err(ReadlineError::Eof) => {
            log::info!("CTRL-D");
            Ok(None)
        }
        Err(err) => Err(anyhow::Error::new(err).context("Failed to read from terminal")),
    }
}

/// Plain buffered input, used for pipes, files and tests
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line).context("Failed to read input")?;
        Ok((read > 0).then_some(line))
    }
}

/// Why [`Application::run`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// An identical start and end time was entered
    Stopped,
    /// The input ran out or was interrupted
    EndOfInput,
}

pub struct Application {
    config: Config,
}

impl Application {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Prompt for and total one day after another until told to stop or the
    /// input ends.
    pub fn run<S: LineSource, W: Write>(&self, source: &mut S, out: &mut W) -> Result<ExitReason> {
        let style = ReportStyle { echo_pairs: self.config.display.echo_pairs };
        if self.config.display.banner {
            write_banner(out)?;
        }

        loop {
            writeln!(out, "{}", self.config.display.prompt)?;
            out.flush()?;

            let Some(line) = source.read_line()? else {
                log::info!("Input finished");
                return Ok(ExitReason::EndOfInput);
            };
            if line.trim().is_empty() {
                continue;
            }

            let report = run_day(&line);
            write_session(out, &report, style)?;
            out.flush()?;

            match report.outcome {
                SessionOutcome::AllPairsRead { input_exhausted: true, .. } => {
                    log::info!("Input ended after the last day");
                    return Ok(ExitReason::EndOfInput);
                }
                SessionOutcome::AllPairsRead { .. } => {}
                SessionOutcome::StopRequested { .. } => return Ok(ExitReason::Stopped),
                SessionOutcome::StreamEnded => {
                    log::info!("Input ended in the middle of an entry");
                    return Ok(ExitReason::EndOfInput);
                }
                SessionOutcome::AbortRequested(_) => {
                    log::debug!("Day discarded, prompting again");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, config: Config) -> (ExitReason, String) {
        let mut source = ReaderSource::new(Cursor::new(input.as_bytes().to_vec()));
        let mut out = Vec::new();
        let reason = Application::new(config).run(&mut source, &mut out).unwrap();
        (reason, String::from_utf8(out).unwrap())
    }

    fn quiet() -> Config {
        let mut config = Config::default();
        config.display.banner = false;
        config
    }

    #[test]
    fn test_reader_source_keeps_newlines() {
        let mut source = ReaderSource::new(Cursor::new(b"a\nb".to_vec()));
        assert_eq!(source.read_line().unwrap(), Some("a\n".to_string()));
        assert_eq!(source.read_line().unwrap(), Some("b".to_string()));
        assert_eq!(source.read_line().unwrap(), None);
    }

    #[test]
    fn test_editor_interrupt_and_eof_end_input() {
        assert_eq!(editor_line(Ok("9:00am-5:00pm".to_string())).unwrap(), Some("9:00am-5:00pm\n".to_string()));
        assert_eq!(editor_line(Err(ReadlineError::Interrupted)).unwrap(), None);
        assert_eq!(editor_line(Err(ReadlineError::Eof)).unwrap(), None);
    }

    #[test]
    fn test_empty_input_ends() {
        let (reason, text) = run("", quiet());
        assert_eq!(reason, ExitReason::EndOfInput);
        assert_eq!(text, "Enter your times:\n");
    }

    #[test]
    fn test_banner_shown_by_default() {
        let (_, text) = run("", Config::default());
        assert!(text.contains("Welcome to PUNCHCARD!"));
    }

    #[test]
    fn test_blank_lines_reprompt() {
        let (reason, text) = run("\n   \n1:00pm-1:00pm\n", quiet());
        assert_eq!(reason, ExitReason::Stopped);
        assert_eq!(text.matches("Enter your times:").count(), 3);
    }

    #[test]
    fn test_custom_prompt() {
        let mut config = quiet();
        config.display.prompt = "Times?".to_string();
        let (_, text) = run("", config);
        assert_eq!(text, "Times?\n");
    }
}
