//! Chat command handler

use anyhow::{Context, Result};
use colored::*;
use uuid::Uuid;

use crate::config::Config;
use tarmac_client::SupervisorClient;

/// Send one chat turn and print the assistant's reply
pub async fn handle(config: &Config, message: String, user: Option<String>) -> Result<()> {
    let user_id = user.unwrap_or_else(|| Uuid::new_v4().to_string());
    let client = SupervisorClient::new(&config.supervisor_url);

    let response = client
        .chat(&user_id, &message)
        .await
        .context("Chat request failed")?;

    println!("{} {}", "you:".dimmed(), message);
    println!("{} {}", "assistant:".cyan().bold(), response.reply);
    println!();
    println!(
        "{} pass {} to continue this conversation",
        "hint:".dimmed(),
        format!("--user {}", user_id).yellow()
    );

    Ok(())
}
