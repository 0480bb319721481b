use clap::Parser;
use coffee_machine::application::machine::CoffeeMachine;
use coffee_machine::interfaces::console::Console;
use log::LevelFilter;
use miette::{IntoDiagnostic, Result};
use simple_logger::SimpleLogger;
use std::io;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more to stderr (-v for info, -vv for debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    SimpleLogger::new()
        .with_level(level)
        .env()
        .init()
        .into_diagnostic()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), CoffeeMachine::new());
    console.run().into_diagnostic()?;

    Ok(())
}
