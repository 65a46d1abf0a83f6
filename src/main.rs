mod cli;

use anyhow::Result;
use clap::Parser;
use codespace::logging::{self, LogTarget};

use cli::dispatch::dispatch;
use cli::types::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The browser owns the terminal, so it logs to a file.
    let target = match cli.command {
        Commands::Browse => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(cli.verbose, target)?;

    dispatch(cli)
}
