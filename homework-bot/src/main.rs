//! Homework Bot
//!
//! Polls the homework status service and tells a Telegram chat when the
//! review status of the most recent assignment changes.
//!
//! Architecture:
//! - Configuration: secrets and endpoints from the environment (or `.env`)
//! - Repositories: trait seams over the status and Bot API clients
//! - Scheduler: the fixed-interval poll loop and its in-memory state
//!
//! State is never persisted; a restart may resend the current status once.

mod config;
mod repository;
mod scheduler;

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{HttpStatusRepository, TelegramNotifier};
use crate::scheduler::HomeworkPoller;
use homework_client::{PracticumClient, TelegramClient};
use homework_core::domain::PollState;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply
    let dotenv = dotenvy::dotenv();

    init_logging(config::log_file_from_env())?;

    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    info!("Starting homework bot");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("CRITICAL: {:#}. Bot stopped.", e);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded configuration: endpoint={}, retry_period={:?}",
        config.endpoint, config.retry_period
    );

    let statuses = Arc::new(HttpStatusRepository::new(PracticumClient::new(
        config.endpoint.clone(),
        config.practicum_token.clone(),
    )));
    let notifier = Arc::new(TelegramNotifier::new(
        TelegramClient::with_base_url(
            config.telegram_api_url.clone(),
            config.telegram_token.clone(),
        ),
        config.telegram_chat_id.clone(),
    ));

    let poller = HomeworkPoller::new(statuses, notifier, config.retry_period);

    poller.run(PollState::starting_now()).await;

    Ok(())
}

/// Loads and validates configuration from the environment
fn load_config() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Installs the stdout subscriber and, when requested, a plain-text file sink
fn init_logging(log_file: Option<PathBuf>) -> Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=info,homework_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}
