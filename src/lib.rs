//! snoocache: a cached client for Reddit's newest-posts listing.
//!
//! Fetches `{base}/{subreddit}/new.json`, normalizes the listing into
//! [`Post`] records, and keeps a file-backed per-subreddit cache so a
//! rate-limited upstream degrades to stale data instead of an error.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod utils;

pub use cache::PostCache;
pub use client::{BlockingClient, Client};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use fetch::{PostSource, RedditFetcher};
pub use models::Post;
