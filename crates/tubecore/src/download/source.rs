//! Fetch collaborator abstraction.
//!
//! Provides the `MediaFetcher` trait: given a URL and a format profile, produce a
//! local file. The bot only talks to this trait, so tests can swap in a scripted
//! fetcher and the real `YtDlpFetcher` stays a plain adapter over the executable.

use async_trait::async_trait;
use std::path::PathBuf;

use super::error::DownloadError;
use super::profile::FormatProfile;

/// Output from a successful download operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutput {
    /// Actual path of the produced file (after merging/transcoding)
    pub file_path: PathBuf,
    /// File size in bytes
    pub file_size: u64,
    /// Source media title, when the fetcher knows it
    pub title: Option<String>,
}

impl DownloadOutput {
    /// File name without directories, for user-facing notices.
    pub fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file_path.to_string_lossy().into_owned())
    }
}

/// Trait for download backends.
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Human-readable name of this backend (e.g., "yt-dlp")
    fn name(&self) -> &str;

    /// Download `url` according to `profile`.
    ///
    /// Dropping the returned future must stop the work; the pool relies on
    /// that to enforce its timeout.
    async fn fetch(&self, url: &str, profile: &FormatProfile) -> Result<DownloadOutput, DownloadError>;
}
