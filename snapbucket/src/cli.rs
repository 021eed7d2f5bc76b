///
/// This module implements the CLI interface for snapbucket: option parsing,
/// the async entrypoint and user-visible output.
///
/// All pipeline logic lives in the [`snapbucket-core`] crate. This module wires
/// the resolved config to the real S3 and clipboard adapters and runs it.
///
/// ## How To Use
/// - For command-line users: run `snapbucket` (see `--help` for overrides).
/// - For programmatic/integration use: call [`run`] with a constructed [`Cli`].
///
/// [`snapbucket-core`]: ../../snapbucket-core/
use crate::clipboard::SystemClipboard;
use crate::load_config::load_config;
use crate::upload::S3Store;
use anyhow::Result;
use clap::Parser;
use snapbucket_core::config::{DEFAULT_BUCKET, DEFAULT_BUCKET_DIR, DEFAULT_DIR, DEFAULT_REGION};
use snapbucket_core::pipeline::publish_latest;
use std::path::PathBuf;

/// CLI for snapbucket: upload the latest screenshot and copy its URL.
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "snapbucket",
    version,
    about = "Upload the latest screenshot to S3 under a content hash and copy its URL"
)]
pub struct Cli {
    /// Screenshot directory
    #[clap(long, env = "SNAPBUCKET_DIR", default_value = DEFAULT_DIR)]
    pub dir: PathBuf,

    /// S3 bucket
    #[clap(long, env = "SNAPBUCKET_BUCKET", default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    /// Directory to store screenshots in bucket
    #[clap(long, env = "SNAPBUCKET_BUCKET_DIR", default_value = DEFAULT_BUCKET_DIR)]
    pub bucket_dir: String,

    /// AWS region of the bucket
    #[clap(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Custom S3-compatible endpoint (uses path-style addressing)
    #[clap(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    let config = load_config(&cli)?;
    let store = S3Store::from_config(&config).await;
    let clipboard = SystemClipboard::new();

    match publish_latest(&config, &store, &clipboard).await {
        Ok(report) => {
            tracing::info!(?report, "Screenshot published");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Publishing screenshot failed");
            Err(e.into())
        }
    }
}
