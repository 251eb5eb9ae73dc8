mod commands;
mod input_output;
mod logging;
mod vocab_selector;

use clap::Parser;
use commands::Commands;
pub use logging::LogArgs;

/// wordindex: learn a vocabulary, then map text to index sequences.
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
