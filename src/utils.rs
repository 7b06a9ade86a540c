// src/utils.rs

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::env;
use std::path::PathBuf;

/// Anchored prefix match: `r/` followed by at least one word character.
/// Trailing characters after a valid prefix are tolerated.
static SUBREDDIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^r/[A-Za-z0-9_]+").expect("static subreddit regex is valid"));

/// Returns true iff `name` starts with a well-formed `r/<name>` prefix.
pub fn is_valid_subreddit(name: &str) -> bool {
    SUBREDDIT_RE.is_match(name)
}

/// Process-wide default location of the cache file.
pub fn default_cache_path() -> PathBuf {
    env::temp_dir().join("snoocache.json")
}

pub fn setup_logging() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .level_for("reqwest", log::LevelFilter::Warn)
        .level_for("hyper", log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()?;
    info!("Logging initialized.");
    Ok(())
}
