//! # Breach Checker
//!
//! Answers whether an email address appears in a known breach, with a
//! cache in front of the record store.

mod bootstrap;
mod di;
mod server;

use breach_checker_api::dto::CheckEmailResponse;
use breach_checker_api::AppState;
use breach_checker_domain::{CacheBackend, CliOverrides};
use breach_checker_jobs::{CacheSweepJob, JobRunner};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::info;

use bootstrap::{init_database, init_logging, load_config};
use di::{Repositories, UseCases};

#[derive(Parser)]
#[command(name = "breach-checker")]
#[command(version)]
#[command(about = "Check email addresses against a breach database")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address (overrides config)
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// HTTP port (overrides config)
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Record store URL (overrides config)
    #[arg(long)]
    database_url: Option<String>,

    /// Cache backend: memory, redis or disabled (overrides config)
    #[arg(long)]
    cache: Option<CacheBackend>,

    /// Redis URL (overrides config)
    #[arg(long)]
    redis_url: Option<String>,

    /// Log level (overrides config)
    #[arg(short = 'l', long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Check a single address and print the result as JSON
    Check {
        /// Address to look up
        email: String,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bind_address: self.bind.clone(),
            port: self.port,
            database_url: self.database_url.clone(),
            cache_backend: self.cache,
            redis_url: self.redis_url.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.overrides())?;
    init_logging(&config)?;

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        port = config.server.port,
        bind = %config.server.bind_address,
        cache = %config.cache.backend,
        "Configuration loaded"
    );

    let pool = init_database(&config.database).await?;
    let repositories = Repositories::new(pool, &config.cache)?;
    let use_cases = UseCases::new(&repositories, &config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let shutdown = CancellationToken::new();

            if let Some(purge) = use_cases.purge_cache.clone() {
                JobRunner::new()
                    .with_cache_sweep(
                        CacheSweepJob::new(purge)
                            .with_interval(config.cache.sweep_interval_secs)
                            .with_cancellation(shutdown.clone()),
                    )
                    .start()
                    .await;
            }

            let state = AppState::new(use_cases.check_email.clone());
            server::start_web_server(&config.server, state, shutdown).await?;
        }
        Command::Check { email } => {
            let result = use_cases.check_email.execute(&email).await?;
            let response = CheckEmailResponse::from(result);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
