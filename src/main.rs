use anyhow::Result;
use gcycle::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Tracing output only materializes in debug mode (GCYCLE_DEBUG or
    // RUST_LOG); the message macros print directly otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    Cli::menu().await
}
