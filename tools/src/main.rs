//! Transcodes the hero background videos from WebM to web-ready MP4.
//!
//! Takes no arguments. Looks in `SITE_VIDEOS_DIR` (default: the frontend's
//! `static/videos`) and runs `FFMPEG_PATH` (default `ffmpeg`). A missing
//! directory just means every source is reported missing.

use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::prelude::*;

mod config;
mod convert;

use config::{Config, VIDEOS};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::from_env();
    info!("converting hero videos in {}", config.videos_dir.display());

    let summary = convert::run(&config.ffmpeg, &config.videos_dir, &VIDEOS).await;
    println!("{}", summary);

    if summary.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}
