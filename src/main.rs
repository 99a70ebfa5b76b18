//! Entry point: parse CLI flags, load settings, start the HTTP server.

use std::sync::Arc;

use clap::Parser;
use scoreline::{config::Settings, server, Result};
use tracing_subscriber::EnvFilter;

/// Player football statistics over HTTP.
#[derive(Debug, Parser)]
#[command(name = "scoreline", version, about)]
struct Args {
    /// Address to bind the HTTP listener on
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    port: u16,
}

/// Run the server.
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::from_env()?;

    let filter =
        EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(environment = %settings.environment, "starting scoreline");

    let app = server::router(Arc::new(settings));
    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
