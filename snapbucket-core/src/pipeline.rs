//! High-level pipeline: locate → load → derive key → upload → publish URL.
//!
//! # Responsibilities
//! - Strictly sequential: each step finishes before the next starts
//! - Fail-fast: the first error aborts the run, nothing is retried or rolled back
//! - The key is derived once and reused for both the upload and the URL
//!
//! # Callable From
//! - The CLI crate, with the real S3 and clipboard adapters
//! - Tests, with `MockObjectStore` / `MockClipboard`

use std::path::PathBuf;
use tracing::{info, info_span, Instrument};

use crate::config::Config;
use crate::contract::{Clipboard, ObjectStore};
use crate::error::Result;
use crate::key::DigestKey;
use crate::publish::{public_url, publish_url, upload};
use crate::screenshot::{latest_screenshot, load_screenshot};

/// What a successful run published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub source: PathBuf,
    pub key: String,
    pub url: String,
    pub size: usize,
    pub content_type: Option<String>,
}

pub async fn publish_latest<S, C>(config: &Config, store: &S, clipboard: &C) -> Result<PublishReport>
where
    S: ObjectStore + ?Sized,
    C: Clipboard + ?Sized,
{
    let span = info_span!("publish_latest", dir = %config.dir.display(), bucket = %config.bucket);
    async move {
        let path = latest_screenshot(&config.dir)?;
        let screenshot = load_screenshot(&path)?;
        let size = screenshot.content.len();

        let key = DigestKey::derive(&screenshot.content, &config.bucket_dir, &screenshot.extension)
            .into_string();
        info!(path = %path.display(), key = %key, size, "Derived storage key");

        println!("uploading {:?} to {:?}", key, config.bucket);
        let content_type = upload(store, &config.bucket, &key, screenshot.content).await?;

        let url = public_url(&config.bucket, &key);
        println!("uploaded {url}");

        publish_url(clipboard, &url)?;

        Ok(PublishReport {
            source: path,
            key,
            url,
            size,
            content_type,
        })
    }
    .instrument(span)
    .await
}
