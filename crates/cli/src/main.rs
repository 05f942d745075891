//! Multi-Disease Screening CLI
//!
//! A command-line tool for listing screens, inspecting input schemas,
//! and running predictions against the clinical screening service.

mod client;
mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{predict, screens};

/// Multi-Disease Screening CLI
#[derive(Parser)]
#[command(name = "mds")]
#[command(author, version, about = "CLI for the Clinical Screening Service", long_about = None)]
pub struct Cli {
    /// API endpoint URL (can also be set via MDS_API_URL env var)
    #[arg(long, env = "MDS_API_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available screens
    Screens,

    /// Show the input schema for a screen
    Schema {
        /// Screen identifier (e.g. diabetes, heart-disease)
        screen: String,
    },

    /// Run a prediction for a screen
    Predict {
        /// Screen identifier (e.g. diabetes, heart-disease)
        screen: String,

        /// Input field as name=value (repeatable)
        #[arg(long, short)]
        field: Vec<String>,

        /// JSON file with input values ({"name": value, ...})
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize client
    let client = client::ApiClient::new(&cli.api_url)?;

    // Execute command
    match cli.command {
        Commands::Screens => {
            screens::list_screens(&client, cli.format).await?;
        }
        Commands::Schema { screen } => {
            screens::show_schema(&client, &screen, cli.format).await?;
        }
        Commands::Predict {
            screen,
            field,
            input,
        } => {
            predict::run_prediction(&client, &screen, &field, input.as_deref(), cli.format).await?;
        }
    }

    Ok(())
}
