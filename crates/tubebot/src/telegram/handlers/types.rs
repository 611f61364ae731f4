//! Handler types and dependencies

use std::sync::Arc;

use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};
use teloxide::types::ChatId;

use crate::messages;
use crate::orchestrator::RequestOrchestrator;
use crate::session::SessionState;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Per-chat session storage shared through the dispatcher dependencies
pub type SessionStorage = InMemStorage<SessionState>;

pub type SessionDialogue = Dialogue<SessionState, SessionStorage>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub orchestrator: Arc<RequestOrchestrator>,
}

impl HandlerDeps {
    pub fn new(orchestrator: Arc<RequestOrchestrator>) -> Self {
        Self { orchestrator }
    }

    /// Logs an error that escaped a handler and tells the chat about it.
    pub async fn report_error(&self, chat_id: ChatId, err: &HandlerError) {
        log::error!("Handler failed for chat {}: {}", chat_id, err);
        if let Err(send_err) = self
            .orchestrator
            .transport()
            .send_text(chat_id, &messages::unexpected_error(err))
            .await
        {
            log::warn!("Failed to report handler error to chat {}: {}", chat_id, send_err);
        }
    }
}
