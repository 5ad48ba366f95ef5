//! Tanker Fleet - trip lifecycle classification for a tanker fleet
//!
//! Summarizes, drills into and exports the dashboard buckets of a user's
//! vehicles, or serves them over HTTP.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
