// src/fetch.rs
//! Upstream fetcher: one GET against the subreddit's `new.json` listing,
//! decoded through dedicated wire structs and mapped into [`Post`] records.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::models::Post;
use crate::utils::is_valid_subreddit;
use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// The abstract fetch capability the client orchestrates over. Production
/// uses [`RedditFetcher`]; tests substitute scripted sources.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetches the newest posts for `subreddit`, in upstream response order.
    async fn fetch_new(&self, subreddit: &str) -> Result<Vec<Post>>;
}

/// Reddit listing envelope: `data.children[*].data` carries the posts.
#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: RawPost,
}

/// One post as Reddit serves it. Field names follow the wire format; the
/// mapping into [`Post`] renames them to this crate's vocabulary.
#[derive(Debug, Deserialize)]
struct RawPost {
    title: String,
    author: String,
    subreddit: String,
    subreddit_type: String,
    num_comments: u64,
    /// Reddit serves fractional epoch seconds.
    created_utc: f64,
    downs: i64,
    ups: i64,
    upvote_ratio: f64,
    id: String,
    permalink: String,
    url: String,
    is_video: bool,
    over_18: bool,
    pinned: bool,
    spoiler: bool,
    locked: bool,
    hidden: bool,
}

impl From<RawPost> for Post {
    fn from(raw: RawPost) -> Self {
        Post {
            title: raw.title,
            author: raw.author,
            subreddit: raw.subreddit,
            subreddit_type: raw.subreddit_type,
            comment_count: raw.num_comments,
            created_at: raw.created_utc as i64,
            downvotes: raw.downs,
            upvotes: raw.ups,
            upvote_ratio: raw.upvote_ratio,
            id: raw.id,
            permanent_link: raw.permalink,
            media_url: raw.url,
            is_video: raw.is_video,
            nsfw: raw.over_18,
            pinned: raw.pinned,
            spoiler: raw.spoiler,
            locked: raw.locked,
            hidden: raw.hidden,
        }
    }
}

/// HTTP fetcher against the Reddit listing API.
pub struct RedditFetcher {
    http: reqwest::Client,
    base_url: String,
}

impl RedditFetcher {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ClientError::Internal(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PostSource for RedditFetcher {
    async fn fetch_new(&self, subreddit: &str) -> Result<Vec<Post>> {
        if !is_valid_subreddit(subreddit) {
            return Err(ClientError::InvalidSubreddit(subreddit.to_string()));
        }

        let url = format!("{}/{}/new.json", self.base_url, subreddit);
        debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;

        // Status first: 429/404 bodies are not guaranteed to be JSON, so the
        // listing is only parsed on success.
        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => Err(ClientError::RateLimited),
            StatusCode::NOT_FOUND => Err(ClientError::SubredditNotFound(subreddit.to_string())),
            status if !status.is_success() => Err(ClientError::Fetch(format!(
                "unexpected status {} from {}",
                status, url
            ))),
            _ => {
                let listing: Listing = response.json().await?;
                let posts: Vec<Post> = listing
                    .data
                    .children
                    .into_iter()
                    .map(|child| Post::from(child.data))
                    .collect();
                debug!("Fetched {} posts for {}", posts.len(), subreddit);
                Ok(posts)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LISTING_FIXTURE: &str = r#"{
        "kind": "Listing",
        "data": {
            "after": "t3_xyz",
            "children": [
                {
                    "kind": "t3",
                    "data": {
                        "title": "Announcing Rust 1.99",
                        "author": "steveklabnik1",
                        "subreddit": "rust",
                        "subreddit_type": "public",
                        "num_comments": 128,
                        "created_utc": 1700000123.0,
                        "downs": 2,
                        "ups": 4096,
                        "upvote_ratio": 0.98,
                        "id": "abc123",
                        "permalink": "/r/rust/comments/abc123/announcing_rust_199/",
                        "url": "https://blog.rust-lang.org/",
                        "is_video": false,
                        "over_18": false,
                        "pinned": true,
                        "spoiler": false,
                        "locked": false,
                        "hidden": false,
                        "extra_field_we_ignore": 42
                    }
                },
                {
                    "kind": "t3",
                    "data": {
                        "title": "help with borrowck",
                        "author": "newbie42",
                        "subreddit": "rust",
                        "subreddit_type": "public",
                        "num_comments": 3,
                        "created_utc": 1700000500.5,
                        "downs": 0,
                        "ups": 7,
                        "upvote_ratio": 0.81,
                        "id": "def456",
                        "permalink": "/r/rust/comments/def456/help_with_borrowck/",
                        "url": "https://www.reddit.com/r/rust/comments/def456/",
                        "is_video": false,
                        "over_18": false,
                        "pinned": false,
                        "spoiler": true,
                        "locked": true,
                        "hidden": false
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn listing_maps_wire_fields_onto_posts() {
        let listing: Listing = serde_json::from_str(LISTING_FIXTURE).unwrap();
        let posts: Vec<Post> = listing
            .data
            .children
            .into_iter()
            .map(|c| Post::from(c.data))
            .collect();

        assert_eq!(posts.len(), 2);

        let first = &posts[0];
        assert_eq!(first.title, "Announcing Rust 1.99");
        assert_eq!(first.author, "steveklabnik1");
        assert_eq!(first.comment_count, 128);
        assert_eq!(first.created_at, 1_700_000_123);
        assert_eq!(first.downvotes, 2);
        assert_eq!(first.upvotes, 4096);
        assert_eq!(first.id, "abc123");
        assert_eq!(first.media_url, "https://blog.rust-lang.org/");
        assert_eq!(first.permanent_link, "/r/rust/comments/abc123/announcing_rust_199/");
        assert!(first.pinned);
        assert!(!first.nsfw);

        // Fractional epoch seconds truncate; response order is preserved.
        let second = &posts[1];
        assert_eq!(second.created_at, 1_700_000_500);
        assert!(second.spoiler);
        assert!(second.locked);
    }

    #[test]
    fn empty_listing_yields_no_posts() {
        let body = r#"{"data": {"children": []}}"#;
        let listing: Listing = serde_json::from_str(body).unwrap();
        assert!(listing.data.children.is_empty());
    }

    #[tokio::test]
    async fn invalid_subreddit_fails_before_any_request() {
        // Unroutable base URL: if validation did not short-circuit, this
        // would fail with a Fetch error instead.
        let config = ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..ClientConfig::default()
        };
        let fetcher = RedditFetcher::new(&config).unwrap();
        let err = fetcher.fetch_new("funny").await.unwrap_err();
        assert_eq!(err, ClientError::InvalidSubreddit("funny".to_string()));
    }
}
