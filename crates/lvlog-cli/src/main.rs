//! lvlog CLI
//!
//! Command-line driver for lvlog loggers

use clap::{Parser, Subcommand};
use lvlog_core::logging_facility::{init, Profile};
use lvlog_core::LogPanic;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "lvlog")]
#[command(about = "lvlog - leveled line logging from the command line", long_about = None)]
struct Cli {
    /// Print the logger's own diagnostics to stderr
    #[arg(long, global = true)]
    diagnostics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Emit one message at a severity
    Emit(commands::emit::EmitArgs),
    /// Write JSON values, one per line
    Dump(commands::dump::DumpArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.diagnostics {
        init(Profile::Development);
    }
    install_panic_hook();

    let result = match cli.command {
        Commands::Emit(args) => commands::emit::execute(args),
        Commands::Dump(args) => commands::dump::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Report PANIC-level messages by their text rather than as an opaque payload
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| match LogPanic::from_payload(info.payload()) {
        Some(panic) => eprintln!("lvlog: panic: {}", panic.message().trim_end()),
        None => default_hook(info),
    }));
}
