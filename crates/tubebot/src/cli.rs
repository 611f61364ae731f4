use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tubebot")]
#[command(author, version, about = "Telegram bot that downloads YouTube videos and audio", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Download one URL without Telegram and print where the file went
    Download {
        /// Media URL
        url: String,

        /// Extract an mp3 instead of downloading the video
        #[arg(short, long)]
        audio: bool,
    },

    /// Check that yt-dlp is installed and print its version
    Check,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["tubebot"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_download_subcommand() {
        let cli = Cli::try_parse_from(["tubebot", "download", "https://youtu.be/x", "--audio"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Download {
                url: "https://youtu.be/x".to_string(),
                audio: true
            })
        );
    }

    #[test]
    fn test_download_requires_url() {
        assert!(Cli::try_parse_from(["tubebot", "download"]).is_err());
    }
}
