//! Decides whether a downloaded file can be sent to the chat.

use super::profile::MediaKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Upload the file
    Send,
    /// Video too large for the Bot API; report instead of uploading
    Oversize { size: u64, limit: u64 },
}

impl Delivery {
    /// Only video is held to the limit; audio is always sent.
    pub fn decide(kind: MediaKind, size: u64, limit: u64) -> Self {
        match kind {
            MediaKind::Video if size > limit => Delivery::Oversize { size, limit },
            _ => Delivery::Send,
        }
    }
}

/// Formats file size into human-readable format (MB, KB or B)
pub fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}
