// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::info;
use snoocache::utils::setup_logging;
use snoocache::{Client, ClientConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "snoocache",
    about = "Fetch and cache a subreddit's newest posts"
)]
struct Cli {
    /// Subreddit to fetch, e.g. r/rust
    subreddit: String,

    /// Bypass the cache and hit the upstream directly
    #[arg(long)]
    fresh: bool,

    /// Print the posts as a JSON array instead of one line per post
    #[arg(long)]
    json: bool,

    /// Override the cache file location
    #[arg(long)]
    cache_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    setup_logging().context("failed to initialize logging")?;

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    if let Some(path) = cli.cache_path {
        config.cache_path = path;
    }

    let mut client = Client::with_config(config)?;
    info!(
        "Cache at {} ({} subreddits)",
        client.cache().path().display(),
        client.cache().len()
    );
    let posts = if cli.fresh {
        client.fetch_posts(&cli.subreddit).await?
    } else {
        client.get_posts(&cli.subreddit).await?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
    } else {
        info!("{} posts for {}", posts.len(), cli.subreddit);
        for post in &posts {
            println!(
                "[{:>6}] {} (u/{}, {} comments)",
                post.upvotes, post.title, post.author, post.comment_count
            );
        }
    }

    Ok(())
}
