//! Download management: format profiles, the yt-dlp fetcher, and the worker pool

pub mod delivery;
pub mod error;
pub mod pool;
pub mod profile;
pub mod source;
pub mod ytdlp;
pub mod ytdlp_errors;

// Re-exports for convenience
pub use delivery::{format_size, Delivery};
pub use error::DownloadError;
pub use pool::DownloadPool;
pub use profile::{FormatProfile, MediaKind, PostProcess, AUDIO_PROFILE, VIDEO_PROFILE};
pub use source::{DownloadOutput, MediaFetcher};
pub use ytdlp::YtDlpFetcher;
pub use ytdlp_errors::YtDlpErrorKind;
