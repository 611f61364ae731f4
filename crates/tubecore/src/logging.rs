//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - A startup summary of the download configuration

use anyhow::Result;
use simplelog::*;
use std::path::Path;

use crate::config;

/// Parses a level name, defaulting to `Info` for anything unknown.
pub fn parse_level(raw: &str) -> LevelFilter {
    match raw.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file (appended to, created if missing)
/// * `level` - Level filter applied to both outputs
pub fn init_logger(log_file_path: &str, level: LevelFilter) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", log_file_path, e))?;

    CombinedLogger::init(vec![
        TermLogger::new(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(level, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Initialize logging from `LOG_FILE_PATH` and `LOG_LEVEL`
pub fn init_from_config() -> Result<()> {
    init_logger(&config::LOG_FILE_PATH, parse_level(&config::LOG_LEVEL))
}

/// Logs the download configuration at application startup
pub fn log_startup_configuration() {
    log::info!("yt-dlp binary: {}", config::YTDL_BIN.as_str());

    let folder = Path::new(config::DOWNLOAD_FOLDER.as_str());
    if folder.exists() {
        log::info!("Download folder: {}", folder.display());
    } else {
        log::info!("Download folder: {} (will be created on first download)", folder.display());
    }

    log::info!(
        "Concurrent downloads: {}, timeout: {}s, video size limit: {} bytes",
        *config::queue::MAX_CONCURRENT_DOWNLOADS,
        *config::download::TIMEOUT_SECS,
        config::limits::MAX_VIDEO_SIZE_BYTES
    );

    match config::bot_api::get_url() {
        Some(url) => log::info!("Bot API URL: {}", url),
        None => log::info!("Bot API URL: official (api.telegram.org)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("nonsense"), LevelFilter::Info);
    }

    #[test]
    fn test_init_logger_bad_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("app.log");
        let result = init_logger(path.to_str().unwrap(), LevelFilter::Info);
        assert!(result.is_err());
    }
}
