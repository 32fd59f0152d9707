//! Tarmac CLI
//!
//! Command-line interface for interacting with the Tarmac supervisor.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "tarmac")]
#[command(about = "Tarmac incident reporting CLI", long_about = None)]
struct Cli {
    /// Supervisor URL
    #[arg(
        long,
        env = "TARMAC_SUPERVISOR_URL",
        default_value = "http://localhost:8085"
    )]
    supervisor_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        supervisor_url: cli.supervisor_url,
    };

    handle_command(cli.command, &config).await
}
