//! Dump command
//!
//! Usage: lvlog dump [--file <FILE>] <JSON>...

use super::SinkArgs;
use clap::Args;

#[derive(Debug, Args)]
pub struct DumpArgs {
    #[command(flatten)]
    pub sink: SinkArgs,

    /// JSON documents, each written back on its own line in compact form
    #[arg(required = true)]
    pub values: Vec<String>,
}

/// Execute dump command
pub fn execute(args: DumpArgs) -> Result<(), Box<dyn std::error::Error>> {
    let values = args
        .values
        .iter()
        .map(|text| serde_json::from_str::<serde_json::Value>(text))
        .collect::<Result<Vec<_>, _>>()?;

    let logger = args.sink.build_logger(None)?;
    logger.print_json(&values);

    Ok(())
}
