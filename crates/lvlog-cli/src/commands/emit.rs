//! Emit command
//!
//! Usage: lvlog emit --level <LEVEL> [--threshold <LEVEL>] [--mode print|line] <WORDS>...

use super::SinkArgs;
use clap::{Args, ValueEnum};
use lvlog_core::Severity;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Words concatenated without separators
    Print,
    /// Words separated by spaces
    Line,
}

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Severity of the message (trace, debug, info, warn, error, fatal, panic)
    #[arg(short, long)]
    pub level: Severity,

    /// Minimum severity written; overrides the config file and LVLOG_LEVEL
    #[arg(short, long)]
    pub threshold: Option<Severity>,

    #[arg(long, value_enum, default_value_t = Mode::Line)]
    pub mode: Mode,

    #[command(flatten)]
    pub sink: SinkArgs,

    /// Message words
    #[arg(required = true)]
    pub words: Vec<String>,
}

/// Execute emit command
///
/// A fatal message ends the process here; a panic message unwinds out of it.
pub fn execute(args: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let logger = args.sink.build_logger(args.threshold)?;
    let values: Vec<&dyn Display> = args.words.iter().map(|w| w as &dyn Display).collect();

    match args.mode {
        Mode::Print => logger.log(args.level, &values),
        Mode::Line => logger.logln(args.level, &values),
    }

    Ok(())
}
