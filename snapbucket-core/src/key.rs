//! Content-derived storage keys.
//!
//! A key is `<bucket_dir>/<first 12 hex chars of sha256(content)><ext>`. It
//! depends only on the bytes, the extension and the prefix, so re-uploading an
//! unchanged file targets the same object.

use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;

/// Number of hex characters of the digest kept in the key.
pub const DIGEST_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigestKey(String);

impl DigestKey {
    pub fn derive(content: &[u8], bucket_dir: &str, extension: &str) -> Self {
        let digest = content_digest(content);
        let name = format!("{}{}", trim_digest(&digest), extension);
        DigestKey(join_key(bucket_dir, &name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DigestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigestKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lowercase hex SHA-256 of `content`.
pub fn content_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

pub fn trim_digest(digest: &str) -> &str {
    &digest[..DIGEST_LEN.min(digest.len())]
}

/// Extension of the final path component including the dot, e.g. `".png"`.
///
/// Everything from the last `.` counts, so `".bashrc"` yields `".bashrc"` and
/// a name without a dot yields an empty string.
pub fn extension_of(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return String::new(),
    };
    match name.rfind('.') {
        Some(idx) => name[idx..].to_string(),
        None => String::new(),
    }
}

/// Joins `name` under `prefix` with `/`, normalising the result.
///
/// Empty and `.` segments are dropped and `..` pops the previous segment, so
/// the key never has a leading, trailing or doubled separator. Backslashes are
/// treated as separators too.
pub fn join_key(prefix: &str, name: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in prefix.split(['/', '\\']).chain(name.split(['/', '\\'])) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}
