use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::error::{Error, Result};

pub const DEFAULT_DIR: &str = "~/Dropbox/Screenshots";
pub const DEFAULT_BUCKET: &str = "i.samby.co.uk";
pub const DEFAULT_BUCKET_DIR: &str = "i";
pub const DEFAULT_REGION: &str = "us-east-1";

/// Resolved run configuration. Built once at startup and passed to each step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Screenshot directory, already home-expanded.
    pub dir: PathBuf,
    pub bucket: String,
    /// Prefix under which all uploads are grouped in the bucket.
    pub bucket_dir: String,
    pub region: String,
    /// Custom S3-compatible endpoint; `None` uses the AWS default for the region.
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Builds a config from raw values, expanding `~` in `dir`.
    ///
    /// Fails with [`Error::Config`] when the home directory is needed but
    /// cannot be resolved, or when the bucket name is empty.
    pub fn new(
        dir: impl AsRef<Path>,
        bucket: impl Into<String>,
        bucket_dir: impl Into<String>,
        region: impl Into<String>,
        endpoint_url: Option<String>,
    ) -> Result<Self> {
        let bucket = bucket.into();
        if bucket.trim().is_empty() {
            error!("Bucket name is empty");
            return Err(Error::Config("bucket name must not be empty".to_string()));
        }
        Ok(Config {
            dir: expand_home(dir.as_ref())?,
            bucket,
            bucket_dir: bucket_dir.into(),
            region: region.into(),
            endpoint_url: endpoint_url.filter(|url| !url.trim().is_empty()),
        })
    }

    pub fn trace_loaded(&self) {
        info!(
            dir = %self.dir.display(),
            bucket = %self.bucket,
            bucket_dir = %self.bucket_dir,
            region = %self.region,
            "Loaded Config"
        );
        debug!(?self, "Config loaded (full debug)");
    }
}

/// Expands a leading `~` or `~/` to the current user's home directory.
///
/// Paths without a leading tilde are returned unchanged. `~user` forms are
/// not supported and are also returned unchanged.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    expand_with_home(path, dirs::home_dir())
}

/// Same as [`expand_home`] with the home directory supplied by the caller.
pub fn expand_with_home(path: &Path, home: Option<PathBuf>) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let rest = if raw == "~" {
        ""
    } else if let Some(rest) = raw.strip_prefix("~/") {
        rest
    } else {
        return Ok(path.to_path_buf());
    };

    match home {
        Some(home) if rest.is_empty() => Ok(home),
        Some(home) => Ok(home.join(rest)),
        None => {
            error!(path = %raw, "Cannot expand home directory");
            Err(Error::Config(format!(
                "cannot expand {raw:?}: home directory not found"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_home_leaves_plain_paths_alone() {
        let p = expand_home(Path::new("/tmp/shots")).unwrap();
        assert_eq!(p, PathBuf::from("/tmp/shots"));
        let p = expand_home(Path::new("relative/~/shots")).unwrap();
        assert_eq!(p, PathBuf::from("relative/~/shots"));
    }

    #[test]
    fn expand_home_replaces_leading_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_home(Path::new("~")).unwrap(), home);
        assert_eq!(
            expand_home(Path::new("~/Dropbox/Screenshots")).unwrap(),
            home.join("Dropbox/Screenshots")
        );
    }

    #[test]
    fn missing_home_is_a_config_error() {
        let err = expand_with_home(Path::new("~/x"), None).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "got {err:?}");
        let err = expand_with_home(Path::new("~"), None).unwrap_err();
        assert!(err.to_string().contains("home directory not found"));
    }

    #[test]
    fn missing_home_is_not_needed_without_tilde() {
        let p = expand_with_home(Path::new("/srv/shots"), None).unwrap();
        assert_eq!(p, PathBuf::from("/srv/shots"));
    }

    #[test]
    fn expand_with_home_joins_the_rest() {
        let home = PathBuf::from("/home/someone");
        let p = expand_with_home(Path::new("~/Dropbox/Screenshots"), Some(home.clone())).unwrap();
        assert_eq!(p, home.join("Dropbox/Screenshots"));
        assert_eq!(expand_with_home(Path::new("~"), Some(home.clone())).unwrap(), home);
    }

    #[test]
    fn empty_bucket_is_a_config_error() {
        let err = Config::new("/tmp", "  ", "i", DEFAULT_REGION, None).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "got {err:?}");
    }

    #[test]
    fn blank_endpoint_is_dropped() {
        let cfg = Config::new("/tmp", "b", "i", DEFAULT_REGION, Some(String::new())).unwrap();
        assert_eq!(cfg.endpoint_url, None);
    }
}
