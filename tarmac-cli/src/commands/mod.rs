//! Command handlers

mod chat;
mod report;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Send a chat message to the assistant
    Chat {
        /// The message to send
        message: String,

        /// User identifier scoping the conversation (defaults to a generated id)
        #[arg(short, long, env = "TARMAC_USER_ID")]
        user: Option<String>,
    },
    /// Submit an image report through the remediation workflow
    Report {
        /// Path to the image file (JPEG)
        #[arg(short, long)]
        image: String,

        /// Reporter metadata as inline JSON
        #[arg(short, long, default_value = "{}")]
        user: String,
    },
}

/// Dispatch a command to its handler
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Chat { message, user } => chat::handle(config, message, user).await,
        Commands::Report { image, user } => report::handle(config, image, user).await,
    }
}
