//! User-facing texts

use indoc::indoc;
use tubecore::download::format_size;
use tubecore::MediaKind;

pub const USAGE: &str = indoc! {"
    Send me a YouTube link and I'll download it for you.

    After you send a link, pick Video or Audio.
    Videos larger than 50 MB can't be sent through Telegram.
"};

pub const CHOOSE_FORMAT: &str = "What should I download?";

pub const DOWNLOAD_COMPLETE: &str = "Download complete!";

pub const REQUEST_EXPIRED: &str = "This request has expired. Send the link again.";

/// Label of the choice button for `kind`
pub fn button_label(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Video => "Video",
        MediaKind::Audio => "Audio",
    }
}

/// Toast shown when a button press is accepted
pub fn downloading(kind: MediaKind) -> String {
    format!("Downloading {}...", kind)
}

pub fn oversize(file_name: &str, size: u64, limit: u64) -> String {
    format!(
        "File size exceeds the limit: {} is {}, the limit is {}.",
        file_name,
        format_size(size),
        format_size(limit)
    )
}

/// Report for a failed request
pub fn error(reason: impl std::fmt::Display) -> String {
    format!("Error: {}", reason)
}

/// Report for an error that escaped a handler
pub fn unexpected_error(reason: impl std::fmt::Display) -> String {
    format!("An error occurred: {}", reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_usage_mentions_limit() {
        assert!(USAGE.contains("50 MB"));
        assert!(USAGE.starts_with("Send me a YouTube link"));
    }

    #[test]
    fn test_oversize_text() {
        assert_eq!(
            oversize("clip.mp4", 60 * 1024 * 1024, 50 * 1024 * 1024),
            "File size exceeds the limit: clip.mp4 is 60.0 MB, the limit is 50.0 MB."
        );
    }

    #[test]
    fn test_error_prefixes() {
        assert_eq!(error("boom"), "Error: boom");
        assert_eq!(unexpected_error("boom"), "An error occurred: boom");
        assert_eq!(downloading(MediaKind::Audio), "Downloading audio...");
    }
}
