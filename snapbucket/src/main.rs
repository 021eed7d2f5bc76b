use anyhow::Result;
use clap::Parser;
use snapbucket::cli::{run, Cli};
use snapbucket::load_config::load_settings_file;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the upload lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // The settings file is optional; any error loading it is ignored.
    if let Err(e) = load_settings_file() {
        tracing::debug!(error = %e, "No .env settings loaded");
    }

    let cli = Cli::parse();
    tracing::info!("CLI arguments parsed, invoking run");
    let result = run(cli).await;
    match &result {
        Ok(_) => tracing::info!("CLI completed successfully"),
        Err(e) => tracing::error!(error = %e, "CLI exited with error"),
    }
    result
}
