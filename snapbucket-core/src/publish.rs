//! Upload and URL publication helpers.

use tracing::{error, info};

use crate::contract::{Clipboard, ObjectStore, PutObjectRequest};
use crate::error::{Error, Result};

/// MIME type for `key` from its extension, or `None` when the extension is unknown.
pub fn content_type_for(key: &str) -> Option<String> {
    mime_guess::from_path(key)
        .first_raw()
        .map(|mime| mime.to_string())
}

/// Public URL of `key` in a bucket served as a static website.
pub fn public_url(bucket: &str, key: &str) -> String {
    format!("http://{bucket}/{key}")
}

/// Issues one put-object for `body` at `key`. The content type is guessed from the key.
pub async fn upload<S>(store: &S, bucket: &str, key: &str, body: Vec<u8>) -> Result<Option<String>>
where
    S: ObjectStore + ?Sized,
{
    let content_type = content_type_for(key);
    info!(
        bucket,
        key,
        size = body.len(),
        content_type = content_type.as_deref().unwrap_or(""),
        "Uploading object"
    );

    let req = PutObjectRequest {
        bucket: bucket.to_string(),
        key: key.to_string(),
        body,
        content_type: content_type.clone(),
    };
    match store.put_object(req).await {
        Ok(()) => {
            info!(bucket, key, "Upload succeeded");
            Ok(content_type)
        }
        Err(e) => {
            error!(bucket, key, error = %e, "Upload failed");
            Err(Error::Upload {
                bucket: bucket.to_string(),
                key: key.to_string(),
                source: e,
            })
        }
    }
}

pub fn publish_url<C>(clipboard: &C, url: &str) -> Result<()>
where
    C: Clipboard + ?Sized,
{
    clipboard.copy_text(url).map_err(|e| {
        error!(url, error = %e, "Failed to copy URL to clipboard");
        Error::Clipboard { source: e }
    })?;
    info!(url, "Copied URL to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_follows_extension() {
        assert_eq!(content_type_for("i/abc.jpg").as_deref(), Some("image/jpeg"));
        assert_eq!(content_type_for("i/abc.png").as_deref(), Some("image/png"));
        assert_eq!(content_type_for("i/abc.gif").as_deref(), Some("image/gif"));
    }

    #[test]
    fn unknown_extension_has_no_content_type() {
        assert_eq!(content_type_for("i/abc.notarealext"), None);
        assert_eq!(content_type_for("i/abc"), None);
    }

    #[test]
    fn url_is_bucket_then_key() {
        assert_eq!(
            public_url("i.example.com", "i/0123456789ab.png"),
            "http://i.example.com/i/0123456789ab.png"
        );
    }
}
