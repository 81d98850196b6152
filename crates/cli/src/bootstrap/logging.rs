use breach_checker_domain::Config;
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, ParseError};

/// Filter from the configured level. The environment is not consulted.
fn level_filter(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::builder().parse(level)
}

pub fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = level_filter(&config.logging.level)?;

    // Logs go to stderr so `check` can print its result on stdout
    let builder = tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.logging.json {
        builder.json().init();
    } else {
        builder.with_ansi(true).init();
    }

    info!("Logging initialized at level: {}", config.logging.level);
    Ok(())
}
