// src/error.rs
//! Error taxonomy for the crate. The variants mirror the distinct upstream
//! failure modes so callers can match on them instead of string-sniffing.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// Subreddit name does not match the `r/<name>` format
    #[error("Invalid Subreddit: {0}")]
    InvalidSubreddit(String),

    /// Upstream returned 404 for the subreddit
    #[error("Subreddit Not Found: {0}")]
    SubredditNotFound(String),

    /// Upstream returned 429
    #[error("Rate limited by upstream (429)")]
    RateLimited,

    /// Transport failure or an unexpected non-success status
    #[error("Fetch Error: {0}")]
    Fetch(String),

    /// Response or cache body could not be decoded
    #[error("Parse Error: {0}")]
    Parse(String),

    /// Cache file could not be read or written
    #[error("Cache Error: {0}")]
    Cache(String),

    /// Runtime plumbing failures (blocking wrapper construction)
    #[error("Internal Error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Cache(format!("I/O error: {}", err))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Parse(format!("Response decode error: {}", err))
        } else {
            ClientError::Fetch(format!("HTTP error: {}", err))
        }
    }
}

impl ClientError {
    /// Whether `Client::get_posts` may serve cached data instead of failing.
    /// Only a rate limit qualifies; everything else propagates.
    pub fn recoverable_from_cache(&self) -> bool {
        matches!(self, ClientError::RateLimited)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rate_limit_recovers_from_cache() {
        assert!(ClientError::RateLimited.recoverable_from_cache());

        let others = [
            ClientError::InvalidSubreddit("funny".into()),
            ClientError::SubredditNotFound("r/doesnotexist".into()),
            ClientError::Fetch("503".into()),
            ClientError::Parse("bad body".into()),
            ClientError::Cache("disk full".into()),
            ClientError::Internal("runtime".into()),
        ];
        for err in others {
            assert!(!err.recoverable_from_cache(), "{err} should propagate");
        }
    }

    #[test]
    fn io_errors_map_to_cache_variant() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(ClientError::from(io), ClientError::Cache(_)));
    }
}
