// src/cache.rs
//! File-backed store mapping subreddit names to their last fetched posts.
//!
//! The whole map lives in memory; every mutation is followed synchronously by
//! a full rewrite of the backing file, so the on-disk state never lags the
//! in-memory state by more than the write in progress. Writes stage into a
//! uniquely named temp file in the same directory and rename into place,
//! making each save a single atomic overwrite.

use crate::error::{ClientError, Result};
use crate::models::Post;
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug)]
pub struct PostCache {
    path: PathBuf,
    entries: HashMap<String, Vec<Post>>,
}

impl PostCache {
    /// Opens the cache at `path`, creating an empty one if the file does not
    /// exist. A file that exists but cannot be decoded is a hard error; the
    /// store never silently discards data.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match fs::read_to_string(&path) {
            Ok(raw) => {
                let entries: HashMap<String, Vec<Post>> =
                    serde_json::from_str(&raw).map_err(|e| {
                        ClientError::Cache(format!(
                            "cache file {} is corrupt: {}",
                            path.display(),
                            e
                        ))
                    })?;
                debug!(
                    "Loaded cache from {} ({} subreddits)",
                    path.display(),
                    entries.len()
                );
                Ok(Self { path, entries })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cache = Self {
                    path,
                    entries: HashMap::new(),
                };
                cache.persist()?;
                info!("Created new cache file at {}", cache.path.display());
                Ok(cache)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-mutating read of the stored posts for `subreddit`.
    pub fn lookup(&self, subreddit: &str) -> Option<&[Post]> {
        self.entries.get(subreddit).map(Vec::as_slice)
    }

    /// Returns the stored posts for `subreddit`; if the key is absent, an
    /// empty entry is inserted and persisted before returning.
    pub fn get_or_insert(&mut self, subreddit: &str) -> Result<Vec<Post>> {
        if let Some(posts) = self.entries.get(subreddit) {
            return Ok(posts.clone());
        }
        self.entries.insert(subreddit.to_string(), Vec::new());
        self.persist()?;
        debug!("Inserted empty cache entry for {}", subreddit);
        Ok(Vec::new())
    }

    /// Overwrites the entry for `subreddit` wholesale and persists.
    pub fn store(&mut self, subreddit: &str, posts: Vec<Post>) -> Result<()> {
        debug!("Caching {} posts for {}", posts.len(), subreddit);
        self.entries.insert(subreddit.to_string(), posts);
        self.persist()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Rewrites the backing file with the full map. Each save stages into its
    /// own uniquely named temp file in the target directory, then renames it
    /// into place: concurrent writers may still race last-write-wins, but
    /// whichever rename lands publishes one complete, decodable file. The
    /// staging file is removed automatically if the publish never happens.
    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| ClientError::Cache(format!("cache serialization failed: {}", e)))?;
        // parent() is Some("") for bare relative file names.
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| ClientError::Cache(format!("cache rename failed: {}", e)))?;
        Ok(())
    }
}
