//! Classification of yt-dlp failures.
//!
//! yt-dlp reports everything through stderr, so the kind is guessed from the
//! text. The kind only feeds log lines; the user sees the yt-dlp message itself.

use strum::{Display, IntoStaticStr};

/// Types of yt-dlp errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum YtDlpErrorKind {
    /// No extractor matched the URL
    UnsupportedUrl,
    /// Video is private, removed, or region-blocked
    Unavailable,
    /// YouTube asked for a sign-in or blocked the request
    BotDetection,
    /// Timeouts, DNS, connection resets
    Network,
    /// ffmpeg post-processing failed
    Postprocessing,
    /// Anything else
    Unknown,
}

/// Analyzes yt-dlp stderr and determines the error kind
pub fn analyze_ytdlp_error(stderr: &str) -> YtDlpErrorKind {
    let stderr_lower = stderr.to_lowercase();

    if stderr_lower.contains("unsupported url") || stderr_lower.contains("is not a valid url") {
        return YtDlpErrorKind::UnsupportedUrl;
    }

    if stderr_lower.contains("private video")
        || stderr_lower.contains("video unavailable")
        || stderr_lower.contains("this video is not available")
        || stderr_lower.contains("video has been removed")
        || stderr_lower.contains("this video does not exist")
    {
        return YtDlpErrorKind::Unavailable;
    }

    if stderr_lower.contains("sign in to confirm you're not a bot")
        || stderr_lower.contains("http error 403")
        || stderr_lower.contains("please sign in")
    {
        return YtDlpErrorKind::BotDetection;
    }

    if stderr_lower.contains("postprocessing") || stderr_lower.contains("ffmpeg not found") {
        return YtDlpErrorKind::Postprocessing;
    }

    if stderr_lower.contains("timed out")
        || stderr_lower.contains("connection")
        || stderr_lower.contains("network is unreachable")
        || stderr_lower.contains("name or service not known")
        || stderr_lower.contains("temporary failure in name resolution")
    {
        return YtDlpErrorKind::Network;
    }

    YtDlpErrorKind::Unknown
}

/// Picks the line that best describes the failure.
///
/// The last `ERROR:` line wins; otherwise the last non-empty line; otherwise
/// a generic message with the exit status.
pub fn summarize_stderr(stderr: &str, status: Option<i32>) -> String {
    let lines: Vec<&str> = stderr.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    if let Some(line) = lines.iter().rev().find(|l| l.starts_with("ERROR:")) {
        return (*line).to_string();
    }
    if let Some(line) = lines.last() {
        return (*line).to_string();
    }
    match status {
        Some(code) => format!("yt-dlp exited with status {}", code),
        None => "yt-dlp was terminated by a signal".to_string(),
    }
}

/// Hints written next to the error in the log
pub fn log_hint(kind: YtDlpErrorKind) -> &'static str {
    match kind {
        YtDlpErrorKind::UnsupportedUrl => "no extractor for this URL",
        YtDlpErrorKind::Unavailable => "video is unavailable, nothing to fix",
        YtDlpErrorKind::BotDetection => "YouTube blocked the request; update yt-dlp or configure cookies",
        YtDlpErrorKind::Network => "check connectivity to the source site",
        YtDlpErrorKind::Postprocessing => "check that ffmpeg is installed and on PATH",
        YtDlpErrorKind::Unknown => "see yt-dlp stderr above; make sure yt-dlp is up to date",
    }
}
