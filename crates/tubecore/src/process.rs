//! Process execution utilities with timeout support
//!
//! Helpers for running yt-dlp so a hung process cannot block the caller forever.

use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

use crate::download::DownloadError;

/// Run an async Command with a timeout.
///
/// The command should have `kill_on_drop(true)`; on timeout the output future
/// is dropped and the child goes with it.
pub async fn run_with_timeout(cmd: &mut Command, bin: &str, timeout: Duration) -> Result<Output, DownloadError> {
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(source)) => Err(DownloadError::Spawn {
            bin: bin.to_string(),
            source,
        }),
        Err(_) => Err(DownloadError::Timeout(timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let bin = "definitely-not-a-real-binary-tubecore";
        let mut cmd = Command::new(bin);
        cmd.kill_on_drop(true);
        let err = run_with_timeout(&mut cmd, bin, Duration::from_secs(5)).await.unwrap_err();
        assert!(matches!(err, DownloadError::Spawn { .. }));
        assert!(err.to_string().starts_with("failed to run definitely-not-a-real-binary-tubecore"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_slow_process_times_out() {
        let mut cmd = Command::new("sleep");
        cmd.arg("5").kill_on_drop(true);
        let err = run_with_timeout(&mut cmd, "sleep", Duration::from_millis(100))
            .await
            .unwrap_err();
        assert!(matches!(err, DownloadError::Timeout(d) if d == Duration::from_millis(100)));
    }
}
