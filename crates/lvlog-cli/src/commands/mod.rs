//! CLI command implementations

pub mod dump;
pub mod emit;

use clap::Args;
use lvlog_core::{LineFlags, Logger, LoggerConfig, Severity};
use std::path::PathBuf;

/// Sink options shared by every command
#[derive(Debug, Args)]
pub struct SinkArgs {
    /// TOML config file; command-line options override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Append to this file instead of stdout
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Comma separated header flags (date,time,microseconds,longfile,shortfile,utc,msgprefix)
    #[arg(long)]
    pub flags: Option<String>,

    /// Text written at the start of every line
    #[arg(long)]
    pub prefix: Option<String>,
}

impl SinkArgs {
    /// Resolve config file, `LVLOG_LEVEL`, then flags given here
    pub fn build_logger(
        &self,
        threshold: Option<Severity>,
    ) -> Result<Logger, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::load(path)?,
            None => LoggerConfig::default(),
        }
        .apply_env();

        if let Some(threshold) = threshold {
            config.level = threshold.name().to_string();
        }
        if let Some(file) = &self.file {
            config.file = Some(file.clone());
        }
        if let Some(flags) = &self.flags {
            // validate now so a typo is reported against the option
            LineFlags::parse_list(flags)?;
            config.flags = flags
                .split(',')
                .map(str::trim)
                .filter(|flag| !flag.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }

        Ok(config.build()?)
    }
}
