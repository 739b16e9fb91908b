mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use coscup_extract::cli::Cli;

#[cfg(not(tarpaulin_include))]
fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(?cli, "parsed CLI arguments");

    if let Err(e) = commands::extract::handle(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
