pub mod app;
pub mod cli;
pub mod config;
pub mod parser;
pub mod report;
pub mod session;
pub mod timecard;

/// Timestamped stderr logging. `RUST_LOG` wins over `default_level`.
pub fn init_logger(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use app::{Application, ExitReason};
pub use config::Config;
pub use session::{run_day, SessionOutcome, SessionReport};
pub use timecard::{ClockTime, DaySummary, Duration, Meridiem};
