//! Developer helper tools.

use anyhow::Result;
use devhelper::cli::{Cli, Command, Parser};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Command::Uri { uri } => devhelper::cli::uri(&cli.opts, uri)?,
        Command::Build(args) => devhelper::cli::build(&cli.opts, args)?,
        Command::Subnet { address } => devhelper::cli::subnet(&cli.opts, address)?,
        Command::Regex(args) => devhelper::cli::regex(&cli.opts, args)?,
    }

    Ok(())
}
