//! Where a manifest comes from and how track urls inside it are resolved.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::config::ManifestSettings;
use crate::http::{self, HttpError, Timeouts};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch manifest {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: HttpError,
    },
    #[error("invalid manifest url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Something that can hand the controller the raw manifest text.
pub trait ManifestSource {
    fn fetch(&self) -> Result<String, ManifestError>;

    /// Turn a track url as written in the manifest into something the media
    /// backend can open. The default leaves it untouched.
    fn resolve(&self, href: &str) -> String {
        href.to_string()
    }

    /// Human-readable description for the status line.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLocation {
    Remote { url: Url, timeouts: Timeouts },
    Local(PathBuf),
}

impl ManifestLocation {
    /// Interpret `value` as an `http(s)://` url or a local path.
    pub fn parse(value: &str, settings: &ManifestSettings) -> Result<Self, ManifestError> {
        let value = value.trim();
        if !http::is_remote(value) {
            let path = value.strip_prefix("file://").unwrap_or(value);
            return Ok(Self::Local(PathBuf::from(path)));
        }

        let url = Url::parse(value).map_err(|source| ManifestError::InvalidUrl {
            url: value.to_string(),
            source,
        })?;
        Ok(Self::Remote {
            url,
            timeouts: Timeouts::from_millis(settings.connect_timeout_ms, settings.read_timeout_ms),
        })
    }
}

impl ManifestSource for ManifestLocation {
    fn fetch(&self) -> Result<String, ManifestError> {
        match self {
            Self::Remote { url, timeouts } => {
                http::get_text(url.as_str(), *timeouts).map_err(|source| ManifestError::Http {
                    url: url.to_string(),
                    source,
                })
            }
            Self::Local(path) => std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
                path: path.clone(),
                source,
            }),
        }
    }

    fn resolve(&self, href: &str) -> String {
        let href = href.trim();
        if href.is_empty() {
            return String::new();
        }

        match self {
            Self::Remote { url, .. } => match url.join(href) {
                Ok(resolved) => resolved.into(),
                Err(err) => {
                    warn!(base = %url, href, error = %err, "cannot resolve track url");
                    href.to_string()
                }
            },
            Self::Local(path) => {
                let target = Path::new(href);
                if target.is_absolute() || Url::parse(href).is_ok() {
                    return href.to_string();
                }
                match path.parent() {
                    Some(dir) if !dir.as_os_str().is_empty() => {
                        dir.join(target).display().to_string()
                    }
                    _ => href.to_string(),
                }
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Remote { url, .. } => url.to_string(),
            Self::Local(path) => path.display().to_string(),
        }
    }
}
