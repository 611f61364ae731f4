//! URL messages and video/audio button presses

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{HandlerDeps, HandlerError, SessionDialogue};
use crate::messages;
use crate::orchestrator::ChoiceOutcome;
use crate::session::SessionState;

/// Any non-command text is taken as a URL and answered with the choice prompt.
pub(super) async fn handle_url_message(
    msg: &Message,
    dialogue: &SessionDialogue,
    deps: &HandlerDeps,
) -> Result<(), HandlerError> {
    let text = msg.text().unwrap_or_default();
    let state = deps.orchestrator.on_url(msg.chat.id, text).await?;
    dialogue.update(state).await?;
    Ok(())
}

/// Acknowledges the button press and, if it belongs to the current prompt,
/// starts the download in the background.
pub(super) async fn handle_choice_callback(
    q: &CallbackQuery,
    dialogue: &SessionDialogue,
    deps: &HandlerDeps,
) -> Result<(), HandlerError> {
    let chat_id = dialogue.chat_id();
    let Some(data) = q.data.as_deref() else {
        acknowledge(q, None, deps).await;
        return Ok(());
    };

    let state = dialogue.get_or_default().await?;
    match deps.orchestrator.on_choice(&state, data) {
        ChoiceOutcome::Accepted(request) => {
            dialogue.update(SessionState::Idle).await?;

            let toast = request.kind.map(messages::downloading);
            acknowledge(q, toast.as_deref(), deps).await;

            let orchestrator = Arc::clone(&deps.orchestrator);
            tokio::spawn(async move {
                let report = orchestrator.download_step(chat_id, request).await;
                log::debug!("Chat {}: download finished: {:?}", chat_id, report);
            });
        }
        ChoiceOutcome::Stale => {
            log::info!("Chat {}: ignoring choice {:?} from an expired prompt", chat_id, data);
            acknowledge(q, Some(messages::REQUEST_EXPIRED), deps).await;
        }
        ChoiceOutcome::Invalid(e) => {
            log::warn!("Chat {}: unrecognized callback data: {}", chat_id, e);
            acknowledge(q, None, deps).await;
        }
    }
    Ok(())
}

/// Answers the press. A failed answer (e.g. "query is too old") only costs
/// the toast, so it is logged and the flow goes on.
async fn acknowledge(q: &CallbackQuery, text: Option<&str>, deps: &HandlerDeps) {
    if let Err(e) = deps.orchestrator.transport().answer_callback(&q.id, text).await {
        log::warn!("Failed to answer callback query {}: {}", q.id.0, e);
    }
}
