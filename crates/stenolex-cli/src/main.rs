//! # stenolex-cli

mod commands;
mod logging;

use clap::Parser;
use commands::Commands;

/// stenolex-cli
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Increase diagnostic verbosity (repeatable).
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);

    args.command.run()
}
