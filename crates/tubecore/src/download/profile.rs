//! Format profiles: what yt-dlp is asked to produce for each media kind.

use std::path::Path;
use strum::{AsRefStr, Display, EnumString};

/// The two things a user can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
}

impl MediaKind {
    pub const ALL: [MediaKind; 2] = [MediaKind::Video, MediaKind::Audio];
}

/// Post-processing step run by yt-dlp after the download
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostProcess {
    /// Extract the audio track and transcode it
    ExtractAudio {
        codec: &'static str,
        bitrate: &'static str,
    },
}

/// Static stream selection and output settings for one media kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatProfile {
    pub kind: MediaKind,
    /// yt-dlp `-f` selector
    pub format: &'static str,
    /// Output file template, relative to the download folder
    pub output_template: &'static str,
    /// Never expand playlists. `--no-playlist` covers watch URLs that also carry
    /// a list; `--playlist-items 1` caps pure playlist URLs at their first entry.
    pub no_playlist: bool,
    /// Container for merged video+audio streams
    pub merge_output_format: Option<&'static str>,
    pub post_process: Option<PostProcess>,
}

/// Best mp4 video with m4a audio, falling back to any single-file mp4, then anything
pub static VIDEO_PROFILE: FormatProfile = FormatProfile {
    kind: MediaKind::Video,
    format: "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best",
    output_template: "%(title)s.%(ext)s",
    no_playlist: true,
    merge_output_format: Some("mp4"),
    post_process: None,
};

/// Best audio stream transcoded to 192 kbit/s mp3
pub static AUDIO_PROFILE: FormatProfile = FormatProfile {
    kind: MediaKind::Audio,
    format: "bestaudio/best",
    output_template: "%(title)s.%(ext)s",
    no_playlist: true,
    merge_output_format: None,
    post_process: Some(PostProcess::ExtractAudio {
        codec: "mp3",
        bitrate: "192K",
    }),
};

impl FormatProfile {
    /// Returns the profile matching the requested kind
    pub fn for_kind(kind: MediaKind) -> &'static FormatProfile {
        match kind {
            MediaKind::Video => &VIDEO_PROFILE,
            MediaKind::Audio => &AUDIO_PROFILE,
        }
    }

    /// Builds the yt-dlp arguments for this profile, without the URL.
    pub fn ytdlp_args(&self, download_dir: &Path) -> Vec<String> {
        let output = download_dir.join(self.output_template);
        let mut args = vec![
            "-f".to_string(),
            self.format.to_string(),
            "-o".to_string(),
            output.to_string_lossy().into_owned(),
        ];

        if self.no_playlist {
            args.extend([
                "--no-playlist".to_string(),
                "--playlist-items".to_string(),
                "1".to_string(),
            ]);
        }

        if let Some(container) = self.merge_output_format {
            args.push("--merge-output-format".to_string());
            args.push(container.to_string());
        }

        if let Some(PostProcess::ExtractAudio { codec, bitrate }) = self.post_process {
            args.extend([
                "--extract-audio".to_string(),
                "--audio-format".to_string(),
                codec.to_string(),
                "--audio-quality".to_string(),
                bitrate.to_string(),
            ]);
        }

        args
    }
}
