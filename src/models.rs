// src/models.rs
//! Core data records shared by the fetcher, the cache, and the clients.

use serde::{Deserialize, Serialize};

/// One submission from a subreddit's newest-posts listing.
///
/// Constructed once by the fetcher (or read back from the cache file) and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub author: String,
    pub subreddit: String,
    pub subreddit_type: String,
    pub comment_count: u64,
    /// Seconds since the Unix epoch.
    pub created_at: i64,
    pub downvotes: i64,
    pub upvotes: i64,
    /// Fraction of votes that are upvotes, in `[0, 1]`.
    pub upvote_ratio: f64,
    /// Unique per post within a subreddit.
    pub id: String,
    /// Path component of the comments page URL.
    pub permanent_link: String,
    /// Linked media or article URL.
    pub media_url: String,
    pub is_video: bool,
    pub nsfw: bool,
    pub pinned: bool,
    pub spoiler: bool,
    pub locked: bool,
    pub hidden: bool,
}
