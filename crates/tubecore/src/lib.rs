//! tubecore - download engine behind the tubegrab Telegram bot
//!
//! No Telegram types live here (unless the `telegram` feature is on, which only
//! adds an error conversion), so the fetch path can be used and tested alone.
//!
//! # Module Structure
//!
//! - `config`: environment-driven configuration
//! - `error`: application error type
//! - `logging`: logger setup and startup diagnostics
//! - `process`: external process helpers
//! - `download`: format profiles, yt-dlp fetcher, worker pool, delivery policy

pub mod config;
pub mod download;
pub mod error;
pub mod logging;
pub mod process;

// Re-export commonly used types for convenience
pub use download::{
    Delivery, DownloadError, DownloadOutput, DownloadPool, FormatProfile, MediaFetcher, MediaKind, YtDlpFetcher,
};
pub use error::{AppError, AppResult};
