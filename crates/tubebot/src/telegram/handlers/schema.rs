//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::handle_command;
use super::requests::{handle_choice_callback, handle_url_message};
use super::types::{HandlerDeps, HandlerError, SessionDialogue, SessionStorage};
use crate::session::SessionState;
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Dependencies the dispatcher must provide besides the `Update`:
/// `Me` (command parsing) and a `SessionStorage` (`InMemStorage<SessionState>`),
/// through which text messages and button presses enter the chat's dialogue.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_messages = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(message_handler(deps_messages))
        .branch(callback_handler(deps_callback))
}

fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);
                if let Err(e) = handle_command(&msg, cmd, &deps).await {
                    deps.report_error(msg.chat.id, &e).await;
                }
                Ok(())
            }
        },
    ))
}

/// Plain text (unknown slash commands excluded) is treated as a URL
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().is_some_and(|text| !text.starts_with('/')))
        .enter_dialogue::<Message, SessionStorage, SessionState>()
        .endpoint(move |msg: Message, dialogue: SessionDialogue| {
            let deps = deps.clone();
            async move {
                if let Err(e) = handle_url_message(&msg, &dialogue, &deps).await {
                    deps.report_error(msg.chat.id, &e).await;
                }
                Ok(())
            }
        })
}

fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query()
        .enter_dialogue::<CallbackQuery, SessionStorage, SessionState>()
        .endpoint(move |q: CallbackQuery, dialogue: SessionDialogue| {
            let deps = deps.clone();
            async move {
                if let Err(e) = handle_choice_callback(&q, &dialogue, &deps).await {
                    deps.report_error(dialogue.chat_id(), &e).await;
                }
                Ok(())
            }
        })
}
