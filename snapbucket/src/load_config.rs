/// `load_config` module: turns the parsed CLI arguments into the core [`Config`].
///
/// Flags, environment variables and `.env` values are already layered by clap
/// by the time [`Cli`] exists. This module only applies the remaining
/// resolution steps: home expansion of the screenshot directory and basic
/// validation.
///
/// # Errors
/// Failures surface as `snapbucket_core::Error::Config` wrapped in `anyhow`
/// with the offending option named.
use anyhow::{Context, Result};
use snapbucket_core::config::Config;
use tracing::{debug, info};

use crate::cli::Cli;

/// Loads the optional `.env` settings file into the process environment.
///
/// Returns the dotenvy error so the caller decides what a missing or
/// malformed file means.
pub fn load_settings_file() -> Result<std::path::PathBuf, dotenvy::Error> {
    dotenvy::dotenv()
}

pub fn load_config(cli: &Cli) -> Result<Config> {
    debug!(
        dir = %cli.dir.display(),
        bucket = %cli.bucket,
        bucket_dir = %cli.bucket_dir,
        "Resolving configuration"
    );

    let config = Config::new(
        &cli.dir,
        cli.bucket.clone(),
        cli.bucket_dir.clone(),
        cli.region.clone(),
        cli.endpoint_url.clone(),
    )
    .with_context(|| format!("invalid configuration (dir {:?})", cli.dir))?;

    config.trace_loaded();
    info!("Config resolved successfully");
    Ok(config)
}
