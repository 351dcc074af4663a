use anyhow::Result;
use stylecheck_words::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Picks the log filter: `RUST_LOG` directives win, otherwise the configured
/// level, which must be one of the plain level names.
fn log_filter(configured_level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    configured_level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            configured_level
        )
    })?;

    Ok(EnvFilter::new(configured_level))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Without HF_API_KEY there is nothing this service can do; refuse to start.
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let filter = match log_filter(&config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        model = %config.llm.model,
        upstream = %config.llm.base_url,
        "StyleCheck word generator starting"
    );

    server::run(config).await?;

    Ok(())
}
