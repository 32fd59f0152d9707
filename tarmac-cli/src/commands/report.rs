//! Report command handler
//!
//! Reads an image from disk, runs it through the supervisor's workflow,
//! and prints the terminal state. Stage failures arrive in-band, so a
//! failed workflow still prints whatever progress was made.

use std::path::Path;

use anyhow::{Context, Result};
use colored::*;
use serde_json::Value;

use crate::config::Config;
use tarmac_client::SupervisorClient;
use tarmac_core::dto::report::ReportResponse;

/// Submit an image report and print the outcome
pub async fn handle(config: &Config, image_path: String, user: String) -> Result<()> {
    let user_info: Value = serde_json::from_str(&user)
        .context("'--user' must be valid JSON (e.g. '{\"name\": \"A. Crew\"}')")?;

    let path = Path::new(&image_path);
    let image = std::fs::read(path)
        .with_context(|| format!("Failed to read image file: {}", image_path))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image.jpg");

    println!("Submitting {} ({} bytes)...", image_path.bold(), image.len());

    let client = SupervisorClient::new(&config.supervisor_url);
    let response = client
        .submit_report(image, file_name, &user_info)
        .await
        .context("Report request failed")?;

    print_outcome(&response);

    Ok(())
}

fn print_outcome(response: &ReportResponse) {
    if let Some(error) = &response.error {
        println!("{} {}", "workflow halted:".red().bold(), error);
    }

    match &response.detection_result {
        Some(detection) => {
            println!(
                "{} {:?} priority, {}: {}",
                "detection:".cyan().bold(),
                detection.priority,
                detection.item,
                detection.description
            );
        }
        None => println!("{} not reached", "detection:".dimmed()),
    }

    match &response.form_result {
        Some(form) => println!(
            "{}\n{}",
            "form:".cyan().bold(),
            serde_json::to_string_pretty(form).unwrap_or_else(|_| form.to_string())
        ),
        None => println!("{} not generated", "form:".dimmed()),
    }

    match &response.submission_result {
        Some(receipt) => println!(
            "{} {} (ticket {})",
            "submission:".green().bold(),
            receipt.status,
            receipt.ticket_id
        ),
        None => println!("{} not submitted", "submission:".dimmed()),
    }
}
