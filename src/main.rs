use anyhow::Result;
use clap::Parser;
use log::info;
use punchcard::app::{Application, EditorSource, ReaderSource};
use punchcard::cli::Cli;
use punchcard::config::Config;
use std::io::{self, IsTerminal};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);

    punchcard::init_logger(&config.logging.level);
    info!("Starting PUNCHCARD v{}", env!("CARGO_PKG_VERSION"));

    let app = Application::new(config);
    let mut out = io::stdout();
    let reason = if io::stdin().is_terminal() {
        app.run(&mut EditorSource::new()?, &mut out)?
    } else {
        app.run(&mut ReaderSource::new(io::stdin().lock()), &mut out)?
    };

    info!("Exiting: {:?}", reason);
    Ok(())
}
