//! hello-responder entry point.
//!
//! Parses arguments, loads configuration, initializes tracing, builds the
//! router and serves it until a shutdown signal arrives.

use std::path::PathBuf;

use clap::Parser;
use const_format::formatcp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hello_responder::config::{
    AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_HTTP_ADDR, DEFAULT_LOG_FILTER, HELLO_PATH,
};
use hello_responder::{create_router, start_server};

const CONFIG_HELP: &str = formatcp!(
    "Path to configuration file [default: {} if present, otherwise listen on {}]",
    DEFAULT_CONFIG_PATH,
    DEFAULT_HTTP_ADDR
);

/// hello-responder: answers GET /hello with OK
#[derive(Parser, Debug)]
#[command(name = "hello-responder", version, about)]
struct Args {
    #[arg(short, long, help = CONFIG_HELP)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "hello_responder=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration comes first since it selects the log format
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    // Log filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();
    tracing::info!(path = HELLO_PATH, "Registered route");

    start_server(app, &config).await?;

    Ok(())
}
