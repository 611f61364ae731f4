//! Request flow: URL → choice prompt → download → delivery.
//!
//! The orchestrator owns no chat state. Handlers load the chat's
//! `SessionState`, pass it in, and store whatever state comes back.

use std::sync::Arc;
use teloxide::types::ChatId;
use tubecore::config;
use tubecore::{AppResult, Delivery, DownloadOutput, DownloadPool, FormatProfile, MediaKind};

use crate::messages;
use crate::session::{ChoiceCallback, ChoiceParseError, PendingRequest, SessionState};
use crate::telegram::keyboard::choice_keyboard;
use crate::telegram::transport::ChatTransport;

/// Result of matching a button press against the chat's session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// The press belongs to the current prompt; the request now carries the kind
    Accepted(PendingRequest),
    /// No pending request, or the press came from a superseded prompt
    Stale,
    Invalid(ChoiceParseError),
}

/// What the download step ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryReport {
    Sent(DownloadOutput),
    Oversize(DownloadOutput),
    Failed(String),
}

pub struct RequestOrchestrator {
    transport: Arc<dyn ChatTransport>,
    pool: DownloadPool,
    video_size_limit: u64,
}

impl RequestOrchestrator {
    pub fn new(transport: Arc<dyn ChatTransport>, pool: DownloadPool) -> Self {
        Self {
            transport,
            pool,
            video_size_limit: config::limits::MAX_VIDEO_SIZE_BYTES,
        }
    }

    pub fn with_video_size_limit(mut self, limit: u64) -> Self {
        self.video_size_limit = limit;
        self
    }

    pub fn transport(&self) -> &Arc<dyn ChatTransport> {
        &self.transport
    }

    pub fn pool(&self) -> &DownloadPool {
        &self.pool
    }

    /// `/start` and `/help`
    pub async fn on_start(&self, chat_id: ChatId) -> AppResult<()> {
        self.transport.send_text(chat_id, messages::USAGE).await
    }

    /// Stores `text` as the chat's pending URL and asks for the media kind.
    ///
    /// Returns the state to store for the chat. Any earlier pending request is
    /// replaced, so buttons of older prompts stop matching.
    pub async fn on_url(&self, chat_id: ChatId, text: &str) -> AppResult<SessionState> {
        let request = PendingRequest::new(text.trim());
        log::info!("Chat {}: pending request {} for {}", chat_id, request.token, request.url);

        self.transport
            .send_choice(chat_id, messages::CHOOSE_FORMAT, choice_keyboard(&request.token))
            .await?;

        Ok(SessionState::AwaitingChoice(request))
    }

    /// Matches callback data against the chat's pending request.
    ///
    /// On `Accepted` the caller stores `SessionState::Idle`; otherwise the
    /// state stays as it was.
    pub fn on_choice(&self, state: &SessionState, data: &str) -> ChoiceOutcome {
        let callback = match ChoiceCallback::parse(data) {
            Ok(callback) => callback,
            Err(e) => return ChoiceOutcome::Invalid(e),
        };

        match state.pending() {
            Some(request) if callback.matches(request) => {
                ChoiceOutcome::Accepted(request.clone().select(callback.kind))
            }
            _ => ChoiceOutcome::Stale,
        }
    }

    /// Downloads the selected media and delivers it, or reports why not.
    ///
    /// Every outcome produces messages in the chat; transport failures while
    /// reporting are only logged.
    pub async fn download_step(&self, chat_id: ChatId, request: PendingRequest) -> DeliveryReport {
        let Some(kind) = request.kind else {
            log::warn!("Chat {}: request {} has no media kind", chat_id, request.token);
            return self.fail(chat_id, "no format selected".to_string()).await;
        };

        let profile = FormatProfile::for_kind(kind);
        let output = match self.pool.run(&request.url, profile).await {
            Ok(output) => output,
            Err(e) => {
                log::error!(
                    "Chat {}: {} download of {} failed [{}]: {}",
                    chat_id,
                    kind,
                    request.url,
                    e.subcategory(),
                    e
                );
                return self.fail(chat_id, e.to_string()).await;
            }
        };

        match Delivery::decide(kind, output.file_size, self.video_size_limit) {
            Delivery::Oversize { size, limit } => {
                log::warn!(
                    "Chat {}: {} is {} bytes, over the {} byte limit; not sending",
                    chat_id,
                    output.file_path.display(),
                    size,
                    limit
                );
                let notice = messages::oversize(&output.file_name(), size, limit);
                if let Err(e) = self.transport.send_text(chat_id, &notice).await {
                    log::error!("Chat {}: failed to send size notice: {}", chat_id, e);
                }
                DeliveryReport::Oversize(output)
            }
            Delivery::Send => self.deliver(chat_id, kind, output).await,
        }
    }

    async fn deliver(&self, chat_id: ChatId, kind: MediaKind, output: DownloadOutput) -> DeliveryReport {
        if let Err(e) = self
            .transport
            .send_media(chat_id, kind, &output.file_path, output.title.as_deref())
            .await
        {
            log::error!("Chat {}: failed to send {}: {}", chat_id, output.file_path.display(), e);
            return self.fail(chat_id, e.to_string()).await;
        }

        if let Err(e) = self.transport.send_text(chat_id, messages::DOWNLOAD_COMPLETE).await {
            log::error!("Chat {}: failed to send completion notice: {}", chat_id, e);
        }
        log::info!("Chat {}: delivered {} ({} bytes)", chat_id, output.file_name(), output.file_size);
        DeliveryReport::Sent(output)
    }

    async fn fail(&self, chat_id: ChatId, reason: String) -> DeliveryReport {
        if let Err(e) = self.transport.send_text(chat_id, &messages::error(&reason)).await {
            log::error!("Chat {}: failed to report error: {}", chat_id, e);
        }
        DeliveryReport::Failed(reason)
    }
}
