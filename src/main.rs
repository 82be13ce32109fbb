use anyhow::Result;
use tracing::{error, info};
use tranzify::{config, server};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_new(&log_level)?)
        .json()
        .init();

    info!("Starting Tranzify with log level: {}", log_level);

    // Nothing is served without a credential.
    let binding = match config::ModelBinding::from_env(&config.llm) {
        Ok(binding) => binding,
        Err(e) => {
            error!("Startup halted: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    server::run(config, binding).await?;

    Ok(())
}
