//! Blocking HTTP helpers shared by the manifest loader and the audio thread.
//!
//! One attempt per request; callers decide what a failure means.

use std::io::Read;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("HTTP status {status}")]
    Status { status: u16 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("failed to read response body: {0}")]
    Body(#[from] std::io::Error),
    #[error("response body exceeds {limit} bytes")]
    TooLarge { limit: u64 },
}

/// Connect/read timeouts for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub read: Duration,
}

impl Timeouts {
    pub fn from_millis(connect_ms: u64, read_ms: u64) -> Self {
        Self {
            connect: Duration::from_millis(connect_ms),
            read: Duration::from_millis(read_ms),
        }
    }
}

/// True for urls this module knows how to fetch.
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn call(url: &str, timeouts: Timeouts) -> Result<ureq::Response, HttpError> {
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(timeouts.connect)
        .timeout_read(timeouts.read)
        .timeout_write(timeouts.read)
        .build();

    match agent.get(url).call() {
        Ok(response) => Ok(response),
        Err(ureq::Error::Status(status, _)) => Err(HttpError::Status { status }),
        Err(ureq::Error::Transport(err)) => Err(HttpError::Transport(err.to_string())),
    }
}

/// GET `url` and return the body decoded as UTF-8 text.
pub fn get_text(url: &str, timeouts: Timeouts) -> Result<String, HttpError> {
    let response = call(url, timeouts)?;
    Ok(response.into_string()?)
}

/// GET `url` and return the raw body, refusing bodies larger than `limit` bytes.
pub fn get_bytes(url: &str, timeouts: Timeouts, limit: u64) -> Result<Vec<u8>, HttpError> {
    let response = call(url, timeouts)?;

    let mut body = Vec::new();
    // Read one byte past the limit so an exactly-full body is still accepted.
    response
        .into_reader()
        .take(limit.saturating_add(1))
        .read_to_end(&mut body)?;
    if body.len() as u64 > limit {
        return Err(HttpError::TooLarge { limit });
    }
    Ok(body)
}

#[cfg(test)]
pub(crate) mod test_server;
