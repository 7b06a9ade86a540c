// src/client.rs
//! Cache-aware orchestration over a [`PostSource`].
//!
//! One decision routine exists, in [`Client::get_posts`]; the blocking
//! variant drives the same future on its own runtime instead of duplicating
//! the control flow.

use crate::cache::PostCache;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::fetch::{PostSource, RedditFetcher};
use crate::models::Post;
use crate::utils::is_valid_subreddit;
use log::{debug, warn};
use std::path::PathBuf;
use std::sync::Arc;

/// Asynchronous client. Owns the in-memory cache for its lifetime and
/// writes through to disk on every successful fetch.
pub struct Client {
    cache: PostCache,
    source: Arc<dyn PostSource>,
}

impl Client {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let fetcher = RedditFetcher::new(&config)?;
        Self::with_source(config.cache_path, Arc::new(fetcher))
    }

    /// Builds a client over an arbitrary post source. This is the seam the
    /// orchestration tests use to script fetch outcomes.
    pub fn with_source(cache_path: impl Into<PathBuf>, source: Arc<dyn PostSource>) -> Result<Self> {
        Ok(Self {
            cache: PostCache::open(cache_path)?,
            source,
        })
    }

    pub fn cache(&self) -> &PostCache {
        &self.cache
    }

    /// Returns the newest posts for `subreddit`, consulting the cache first.
    ///
    /// A non-empty cached entry is returned as-is with no network call. On a
    /// miss (or an empty entry) the source is fetched and the result written
    /// through. A rate-limited fetch falls back to whatever the cache holds,
    /// inserting an empty entry if nothing was there; every other fetch
    /// error propagates unchanged.
    pub async fn get_posts(&mut self, subreddit: &str) -> Result<Vec<Post>> {
        if !is_valid_subreddit(subreddit) {
            return Err(ClientError::InvalidSubreddit(subreddit.to_string()));
        }

        if let Some(posts) = self.cache.lookup(subreddit) {
            if !posts.is_empty() {
                debug!("Cache hit for {} ({} posts)", subreddit, posts.len());
                return Ok(posts.to_vec());
            }
            debug!("Cache entry for {} is empty, refetching", subreddit);
        }

        match self.source.fetch_new(subreddit).await {
            Ok(posts) => {
                self.cache.store(subreddit, posts.clone())?;
                Ok(posts)
            }
            Err(e) if e.recoverable_from_cache() => {
                warn!("Fetch for {} rate limited, serving cached data", subreddit);
                self.cache.get_or_insert(subreddit)
            }
            Err(e) => Err(e),
        }
    }

    /// Direct, uncached fetch. Same validation as [`Self::get_posts`], but
    /// no error is ever recovered here, rate limits included.
    pub async fn fetch_posts(&self, subreddit: &str) -> Result<Vec<Post>> {
        if !is_valid_subreddit(subreddit) {
            return Err(ClientError::InvalidSubreddit(subreddit.to_string()));
        }
        self.source.fetch_new(subreddit).await
    }
}

/// Synchronous counterpart of [`Client`]. Blocks the calling thread at the
/// network call instead of suspending; behaviour is otherwise identical
/// since every method delegates to the async client.
pub struct BlockingClient {
    runtime: tokio::runtime::Runtime,
    inner: Client,
}

impl BlockingClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Internal(format!("failed to build runtime: {}", e)))?;
        Ok(Self {
            runtime,
            inner: Client::with_config(config)?,
        })
    }

    pub fn with_source(cache_path: impl Into<PathBuf>, source: Arc<dyn PostSource>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Internal(format!("failed to build runtime: {}", e)))?;
        Ok(Self {
            runtime,
            inner: Client::with_source(cache_path, source)?,
        })
    }

    pub fn cache(&self) -> &PostCache {
        self.inner.cache()
    }

    pub fn get_posts(&mut self, subreddit: &str) -> Result<Vec<Post>> {
        self.runtime.block_on(self.inner.get_posts(subreddit))
    }

    pub fn fetch_posts(&self, subreddit: &str) -> Result<Vec<Post>> {
        self.runtime.block_on(self.inner.fetch_posts(subreddit))
    }
}
