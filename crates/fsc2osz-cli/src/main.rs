mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (defaults to info when RUST_LOG is unset)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fsc2osz_cli=info,fsc2osz_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(
        "Input: {}, output directory: {}",
        args.input.display(),
        args.output_dir.display()
    );
    commands::convert::run(&args.input, &args.output_dir)
}
