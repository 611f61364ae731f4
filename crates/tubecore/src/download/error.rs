use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use super::ytdlp_errors::YtDlpErrorKind;

/// Structured error type for the fetch step.
///
/// Every way a download can fail ends up here, so the caller gets an explicit
/// result instead of a panic or a bare string.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The submitted text is not an absolute http(s) URL
    #[error("not a valid URL: {0}")]
    InvalidUrl(String),

    /// yt-dlp could not be started at all
    #[error("failed to run {bin}: {source}")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    /// yt-dlp exited with a failure status
    #[error("{message}")]
    YtDlp { kind: YtDlpErrorKind, message: String },

    /// Download or transcoding exceeded the configured timeout
    #[error("download timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// yt-dlp succeeded but its output could not be understood
    #[error("unexpected yt-dlp output: {0}")]
    MalformedOutput(String),

    /// Expected file not found after processing
    #[error("downloaded file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Filesystem errors around the download directory or result file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The worker pool was shut down while the request waited for a slot
    #[error("download pool is closed")]
    PoolClosed,
}

impl DownloadError {
    /// Returns subcategory for log lines
    pub fn subcategory(&self) -> &'static str {
        match self {
            DownloadError::InvalidUrl(_) => "invalid_url",
            DownloadError::Spawn { .. } => "spawn",
            DownloadError::YtDlp { kind, .. } => kind.into(),
            DownloadError::Timeout(_) => "timeout",
            DownloadError::MalformedOutput(_) => "malformed_output",
            DownloadError::FileNotFound(_) => "file_not_found",
            DownloadError::Io(_) => "io",
            DownloadError::PoolClosed => "pool_closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_error_display() {
        let err = DownloadError::YtDlp {
            kind: YtDlpErrorKind::Unavailable,
            message: "ERROR: [youtube] abc: Video unavailable".into(),
        };
        assert_eq!(err.to_string(), "ERROR: [youtube] abc: Video unavailable");

        let err = DownloadError::Timeout(Duration::from_secs(600));
        assert_eq!(err.to_string(), "download timed out after 600s");

        let err = DownloadError::FileNotFound(PathBuf::from("downloads/a.mp4"));
        assert_eq!(err.to_string(), "downloaded file not found: downloads/a.mp4");
    }

    #[test]
    fn test_download_error_subcategory() {
        assert_eq!(DownloadError::InvalidUrl("".into()).subcategory(), "invalid_url");
        assert_eq!(DownloadError::Timeout(Duration::ZERO).subcategory(), "timeout");
        assert_eq!(DownloadError::PoolClosed.subcategory(), "pool_closed");
        assert_eq!(
            DownloadError::YtDlp {
                kind: YtDlpErrorKind::Network,
                message: String::new()
            }
            .subcategory(),
            "network"
        );
    }

    #[test]
    fn test_spawn_error_names_binary() {
        let err = DownloadError::Spawn {
            bin: "yt-dlp".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(err.to_string(), "failed to run yt-dlp: No such file or directory");
    }
}
