//! YtDlpFetcher: the `MediaFetcher` backed by the yt-dlp executable.
//!
//! yt-dlp is asked to print the final info dict as JSON once the file has been
//! moved into place (`--print after_move:%()j`), which gives the real output
//! path after merging or audio extraction.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use url::Url;

use super::error::DownloadError;
use super::profile::FormatProfile;
use super::source::{DownloadOutput, MediaFetcher};
use super::ytdlp_errors::{analyze_ytdlp_error, log_hint, summarize_stderr};
use crate::config;
use crate::process::run_with_timeout;

/// Fields of the yt-dlp info dict we care about
#[derive(Debug, Deserialize)]
struct YtDlpInfo {
    title: Option<String>,
    /// Final path after post-processors ran
    filepath: Option<String>,
    /// Path from the output template, before post-processing
    #[serde(rename = "_filename")]
    filename: Option<String>,
}

/// Download source powered by yt-dlp.
#[derive(Debug, Clone)]
pub struct YtDlpFetcher {
    bin: String,
    download_dir: PathBuf,
}

impl YtDlpFetcher {
    pub fn new(bin: impl Into<String>, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            download_dir: download_dir.into(),
        }
    }

    /// Fetcher using `YTDL_BIN` and `DOWNLOAD_FOLDER`
    pub fn from_config() -> Self {
        Self::new(config::YTDL_BIN.as_str(), config::DOWNLOAD_FOLDER.as_str())
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Full argument list for one download. The URL goes after `--` so it can
    /// never be parsed as an option.
    pub fn build_args(&self, url: &Url, profile: &FormatProfile) -> Vec<String> {
        let mut args = vec![
            "--no-simulate".to_string(),
            "--no-progress".to_string(),
            "--print".to_string(),
            "after_move:%()j".to_string(),
        ];
        args.extend(profile.ytdlp_args(&self.download_dir));
        args.push("--".to_string());
        args.push(url.to_string());
        args
    }

    /// Returns the installed yt-dlp version string.
    pub async fn version(&self) -> Result<String, DownloadError> {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("--version").stdin(Stdio::null()).kill_on_drop(true);
        let output = run_with_timeout(&mut cmd, &self.bin, config::download::probe_timeout()).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DownloadError::YtDlp {
                kind: analyze_ytdlp_error(&stderr),
                message: summarize_stderr(&stderr, output.status.code()),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Accepts only absolute http(s) URLs.
pub fn parse_media_url(text: &str) -> Result<Url, DownloadError> {
    let trimmed = text.trim();
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host_str().is_some() => Ok(url),
        _ => Err(DownloadError::InvalidUrl(trimmed.to_string())),
    }
}

/// Extracts the info dict from yt-dlp stdout (the last JSON line).
fn parse_info(stdout: &str) -> Result<YtDlpInfo, DownloadError> {
    let line = stdout
        .lines()
        .map(str::trim)
        .rev()
        .find(|line| line.starts_with('{'))
        .ok_or_else(|| DownloadError::MalformedOutput("no info JSON in yt-dlp output".to_string()))?;

    serde_json::from_str(line).map_err(|e| DownloadError::MalformedOutput(e.to_string()))
}

/// Stats the produced file and builds the result.
async fn resolve_output(info: YtDlpInfo) -> Result<DownloadOutput, DownloadError> {
    let path = info
        .filepath
        .or(info.filename)
        .map(PathBuf::from)
        .ok_or_else(|| DownloadError::MalformedOutput("info JSON has no file path".to_string()))?;

    let metadata = match fs_err::tokio::metadata(&path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(DownloadError::FileNotFound(path)),
        Err(e) => return Err(DownloadError::Io(e)),
    };

    Ok(DownloadOutput {
        file_path: path,
        file_size: metadata.len(),
        title: info.title,
    })
}

#[async_trait]
impl MediaFetcher for YtDlpFetcher {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    async fn fetch(&self, url: &str, profile: &FormatProfile) -> Result<DownloadOutput, DownloadError> {
        let url = parse_media_url(url)?;
        fs_err::tokio::create_dir_all(&self.download_dir).await?;

        let args = self.build_args(&url, profile);
        log::info!("Starting yt-dlp {} download: {}", profile.kind, url);
        log::debug!("{} {}", self.bin, args.join(" "));

        let output = Command::new(&self.bin)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| DownloadError::Spawn {
                bin: self.bin.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let kind = analyze_ytdlp_error(&stderr);
            log::error!("yt-dlp failed for {} ({}): {}", url, kind, stderr.trim());
            log::error!("Hint: {}", log_hint(kind));
            return Err(DownloadError::YtDlp {
                kind,
                message: summarize_stderr(&stderr, output.status.code()),
            });
        }

        let info = parse_info(&String::from_utf8_lossy(&output.stdout))?;
        let result = resolve_output(info).await?;
        log::info!(
            "yt-dlp finished {}: {} ({} bytes)",
            url,
            result.file_path.display(),
            result.file_size
        );
        Ok(result)
    }
}
