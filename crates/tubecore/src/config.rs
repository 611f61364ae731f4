use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the bot
/// Cached yt-dlp binary path
/// Read once at startup from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Download folder path
/// Read from DOWNLOAD_FOLDER environment variable
/// Defaults to `downloads` relative to the working directory
/// Supports tilde (~) expansion for home directory
pub static DOWNLOAD_FOLDER: Lazy<String> = Lazy::new(|| {
    let raw = env::var("DOWNLOAD_FOLDER").unwrap_or_else(|_| "downloads".to_string());
    shellexpand::tilde(&raw).to_string()
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: tubegrab.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "tubegrab.log".to_string()));

/// Log level filter name (error, warn, info, debug, trace)
/// Read from LOG_LEVEL environment variable
/// Default: info
pub static LOG_LEVEL: Lazy<String> = Lazy::new(|| env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable.
/// `None` when neither is set or the value is blank.
pub static BOT_TOKEN: Lazy<Option<String>> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .ok()
        .and_then(|token| non_empty(&token))
});

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses a numeric environment variable, falling back to `default` when unset or invalid.
fn env_number<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {}={:?}, using default", name, raw);
            default
        }),
        Err(_) => default,
    }
}

/// Download worker pool configuration
pub mod queue {
    use once_cell::sync::Lazy;

    /// Maximum number of concurrent yt-dlp processes
    /// Read from MAX_CONCURRENT_DOWNLOADS environment variable
    /// Default: 2. Zero is bumped to 1.
    pub static MAX_CONCURRENT_DOWNLOADS: Lazy<usize> =
        Lazy::new(|| super::env_number("MAX_CONCURRENT_DOWNLOADS", 2usize).max(1));
}

/// Download configuration
pub mod download {
    use super::Duration;
    use once_cell::sync::Lazy;

    /// Default timeout for a single download, including transcoding (10 minutes)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

    /// Timeout for a single download
    /// Read from DOWNLOAD_TIMEOUT_SECS environment variable
    pub static TIMEOUT_SECS: Lazy<u64> =
        Lazy::new(|| super::env_number("DOWNLOAD_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS).max(1));

    /// Download timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(*TIMEOUT_SECS)
    }

    /// Timeout for short yt-dlp invocations such as `--version`
    pub const PROBE_TIMEOUT_SECS: u64 = 30;

    pub fn probe_timeout() -> Duration {
        Duration::from_secs(PROBE_TIMEOUT_SECS)
    }
}

/// Size limits applied before sending files to Telegram
pub mod limits {
    /// Maximum video size the bot will upload (50 MiB)
    /// Telegram Bot API allows up to 50MB for files sent by bots
    pub const MAX_VIDEO_SIZE_BYTES: u64 = 50 * 1024 * 1024;
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    /// Large enough for a 50 MB upload on a slow link
    pub const REQUEST_TIMEOUT_SECS: u64 = 300;

    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Bot API server configuration
pub mod bot_api {
    /// Returns the BOT_API_URL environment variable if set and non-empty.
    pub fn get_url() -> Option<String> {
        std::env::var("BOT_API_URL").ok().and_then(|url| super::non_empty(&url))
    }
}
