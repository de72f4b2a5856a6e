//! CLI for the ytlive client.

mod attempts;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ytlive_core::config;

use commands::{run_config_path, run_details};

/// Top-level CLI for ytlive.
#[derive(Debug, Parser)]
#[command(name = "ytlive")]
#[command(about = "ytlive: look up YouTube live-streaming details", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch live-streaming details for a video and print them as JSON.
    Details {
        /// YouTube video ID.
        video_id: String,
        /// API key (overrides YTLIVE_API_KEY and the config file).
        #[arg(long, value_name = "KEY")]
        api_key: Option<String>,
        /// Maximum attempts while the call stays retryable (default from config).
        #[arg(long, value_name = "N")]
        attempts: Option<u32>,
    },

    /// Print the config file location.
    ConfigPath,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Details {
                video_id,
                api_key,
                attempts,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: base_url={}", cfg.base_url);
                run_details(&cfg, &video_id, api_key.as_deref(), attempts).await?;
            }
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}
