//! Command handler implementations (/start, /help)

use teloxide::types::Message;

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;

pub(super) async fn handle_command(msg: &Message, cmd: Command, deps: &HandlerDeps) -> Result<(), HandlerError> {
    match cmd {
        Command::Start | Command::Help => deps.orchestrator.on_start(msg.chat.id).await?,
    }
    Ok(())
}
