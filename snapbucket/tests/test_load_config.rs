use clap::Parser;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

use snapbucket::cli::Cli;
use snapbucket::load_config::load_config;

const VARS: [&str; 5] = [
    "SNAPBUCKET_DIR",
    "SNAPBUCKET_BUCKET",
    "SNAPBUCKET_BUCKET_DIR",
    "AWS_REGION",
    "AWS_ENDPOINT_URL",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

/// Defaults apply when neither flags nor environment say otherwise.
#[test]
#[serial]
fn test_load_config_defaults() {
    clear_env();
    let cli = Cli::try_parse_from(["snapbucket"]).expect("no arguments should parse");
    let config = load_config(&cli).expect("Config should load");

    assert_eq!(config.bucket, "i.samby.co.uk");
    assert_eq!(config.bucket_dir, "i");
    assert_eq!(config.region, "us-east-1");
    assert_eq!(config.endpoint_url, None);
    if let Some(home) = dirs_home() {
        assert_eq!(config.dir, home.join("Dropbox/Screenshots"));
    }
}

/// Environment variables override the defaults.
#[test]
#[serial]
fn test_load_config_from_env() {
    clear_env();
    env::set_var("SNAPBUCKET_DIR", "/srv/shots");
    env::set_var("SNAPBUCKET_BUCKET", "cdn.example.com");
    env::set_var("SNAPBUCKET_BUCKET_DIR", "screens/2024");
    env::set_var("AWS_REGION", "eu-west-1");

    let cli = Cli::try_parse_from(["snapbucket"]).unwrap();
    let config = load_config(&cli).expect("Config should load");
    clear_env();

    assert_eq!(config.dir, PathBuf::from("/srv/shots"));
    assert_eq!(config.bucket, "cdn.example.com");
    assert_eq!(config.bucket_dir, "screens/2024");
    assert_eq!(config.region, "eu-west-1");
}

/// Flags win over environment variables.
#[test]
#[serial]
fn test_load_config_flags_override_env() {
    clear_env();
    env::set_var("SNAPBUCKET_BUCKET", "from-env.example.com");

    let cli = Cli::try_parse_from([
        "snapbucket",
        "--bucket",
        "from-flag.example.com",
        "--bucket-dir",
        "x",
        "--dir",
        "/tmp/shots",
        "--endpoint-url",
        "http://localhost:9000",
    ])
    .unwrap();
    let config = load_config(&cli).expect("Config should load");
    clear_env();

    assert_eq!(config.bucket, "from-flag.example.com");
    assert_eq!(config.bucket_dir, "x");
    assert_eq!(config.dir, PathBuf::from("/tmp/shots"));
    assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:9000"));
}

/// An empty bucket name is rejected with a config error.
#[test]
#[serial]
fn test_load_config_errors_on_empty_bucket() {
    clear_env();
    let cli = Cli::try_parse_from(["snapbucket", "--bucket", ""]).unwrap();
    let err = load_config(&cli).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("config error"), "Config error expected, got: {msg}");
}

fn dirs_home() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}
