//! Bounded download pool.
//!
//! Caps the number of concurrent fetches with a semaphore and puts a timeout on
//! each one, so a slow transfer in one chat cannot starve the others.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

use super::error::DownloadError;
use super::profile::FormatProfile;
use super::source::{DownloadOutput, MediaFetcher};
use crate::config;

#[derive(Clone)]
pub struct DownloadPool {
    fetcher: Arc<dyn MediaFetcher>,
    permits: Arc<Semaphore>,
    max_concurrent: usize,
    timeout: Duration,
}

impl DownloadPool {
    /// Creates a pool running at most `max_concurrent` fetches at once (minimum 1).
    pub fn new(fetcher: Arc<dyn MediaFetcher>, max_concurrent: usize, timeout: Duration) -> Self {
        let max_concurrent = max_concurrent.max(1);
        Self {
            fetcher,
            permits: Arc::new(Semaphore::new(max_concurrent)),
            max_concurrent,
            timeout,
        }
    }

    /// Pool sized from `MAX_CONCURRENT_DOWNLOADS` and `DOWNLOAD_TIMEOUT_SECS`
    pub fn from_config(fetcher: Arc<dyn MediaFetcher>) -> Self {
        Self::new(
            fetcher,
            *config::queue::MAX_CONCURRENT_DOWNLOADS,
            config::download::timeout(),
        )
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Stops handing out slots; waiting and future calls get `PoolClosed`.
    pub fn close(&self) {
        self.permits.close();
    }

    /// Waits for a free slot, then runs the fetch under the timeout.
    ///
    /// Time spent waiting for a slot does not count against the timeout.
    pub async fn run(&self, url: &str, profile: &FormatProfile) -> Result<DownloadOutput, DownloadError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| DownloadError::PoolClosed)?;

        log::debug!(
            "Download slot acquired for {} ({} of {} free)",
            url,
            self.permits.available_permits(),
            self.max_concurrent
        );

        match tokio::time::timeout(self.timeout, self.fetcher.fetch(url, profile)).await {
            Ok(result) => result,
            Err(_) => {
                log::warn!(
                    "{} download of {} timed out after {}s",
                    self.fetcher.name(),
                    url,
                    self.timeout.as_secs()
                );
                Err(DownloadError::Timeout(self.timeout))
            }
        }
    }
}
