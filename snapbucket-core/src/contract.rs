//! # contract: interfaces to the services the pipeline calls
//!
//! The pipeline never talks to S3 or the desktop clipboard directly. It goes
//! through the two traits below, which the CLI crate implements for real and
//! tests replace with `mockall` mocks.
//!
//! ## Mocking & Testing
//! - Both traits are annotated for `mockall`; with the `test-export-mocks`
//!   feature (on by default) `MockObjectStore` and `MockClipboard` are exported
//!   for use in other crates' tests.
//!
//! ## Adding New Destinations
//! - Implement [`ObjectStore`] for the destination and convert every upstream
//!   failure into a [`BoxError`]. The pipeline wraps it in `Error::Upload`.

use async_trait::async_trait;

#[allow(unused_imports)]
use mockall::{automock, predicate::*};

pub use crate::error::BoxError;

/// A single put-object call: create or overwrite `key` in `bucket`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutObjectRequest {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    /// MIME type guessed from the key; `None` leaves the provider default.
    pub content_type: Option<String>,
}

/// Object storage that accepts single-shot writes.
///
/// Implementations make exactly one attempt per call; there is no retry.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, req: PutObjectRequest) -> Result<(), BoxError>;
}

/// Destination for the published URL.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
pub trait Clipboard: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<(), BoxError>;
}
