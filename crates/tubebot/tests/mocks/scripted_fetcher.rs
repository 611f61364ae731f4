use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tubecore::{DownloadError, DownloadOutput, FormatProfile, MediaFetcher, MediaKind};

/// One call the flow made to the fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub url: String,
    pub kind: MediaKind,
    pub format: String,
}

/// Replays queued results in order; an empty queue is a malformed-output error.
#[derive(Default)]
pub struct ScriptedFetcher {
    results: Mutex<VecDeque<Result<DownloadOutput, DownloadError>>>,
    calls: Mutex<Vec<FetchCall>>,
    delay: Option<Duration>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(result: Result<DownloadOutput, DownloadError>) -> Self {
        let fetcher = Self::default();
        fetcher.push(result);
        fetcher
    }

    /// Sleeps before answering, to exercise the pool timeout
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push(&self, result: Result<DownloadOutput, DownloadError>) {
        self.results.lock().unwrap().push_back(result);
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaFetcher for ScriptedFetcher {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self, url: &str, profile: &FormatProfile) -> Result<DownloadOutput, DownloadError> {
        self.calls.lock().unwrap().push(FetchCall {
            url: url.to_string(),
            kind: profile.kind,
            format: profile.format.to_string(),
        });
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let next = self.results.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(DownloadError::MalformedOutput("no scripted result left".to_string())))
    }
}

/// A download result for a file under `/srv/downloads`
pub fn output(name: &str, size: u64) -> DownloadOutput {
    DownloadOutput {
        file_path: PathBuf::from("/srv/downloads").join(name),
        file_size: size,
        title: Some(name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name).to_string()),
    }
}
