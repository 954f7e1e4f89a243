use crate::config::Config;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// PUNCHCARD - turn clock-in/clock-out times into quarter-hour rounded work hours
#[derive(Debug, Parser)]
#[command(name = "punchcard")]
#[command(about = "Turn clock-in/clock-out times into quarter-hour rounded work hours", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the welcome text
    #[arg(long = "no-banner")]
    pub no_banner: bool,

    /// Log level for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// Command line flags win over the config file.
    pub fn apply(&self, config: &mut Config) {
        if self.no_banner {
            config.display.banner = false;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level.as_filter().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["punchcard"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.no_banner);
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "punchcard",
            "--no-banner",
            "--log-level",
            "debug",
            "--config",
            "/tmp/punchcard.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/punchcard.toml")));

        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(!config.display.banner);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["punchcard", "--log-level", "loud"]).is_err());
    }
}
