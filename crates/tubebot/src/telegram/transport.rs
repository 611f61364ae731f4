//! Outgoing chat operations.
//!
//! The orchestrator sends everything through `ChatTransport`, so the request
//! flow can run against a recording transport in tests and against the Bot API
//! in production.

use async_trait::async_trait;
use std::path::Path;
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, InlineKeyboardMarkup, InputFile};
use tubecore::{AppResult, MediaKind};

use super::Bot;

#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> AppResult<()>;

    /// Sends `text` with an inline keyboard attached
    async fn send_choice(&self, chat_id: ChatId, text: &str, keyboard: InlineKeyboardMarkup) -> AppResult<()>;

    /// Uploads a local file as a video or an audio message
    async fn send_media(&self, chat_id: ChatId, kind: MediaKind, path: &Path, caption: Option<&str>) -> AppResult<()>;

    /// Answers a button press, optionally with a short toast
    async fn answer_callback(&self, callback_id: &CallbackQueryId, text: Option<&str>) -> AppResult<()>;
}

/// `ChatTransport` backed by the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> AppResult<()> {
        self.bot.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn send_choice(&self, chat_id: ChatId, text: &str, keyboard: InlineKeyboardMarkup) -> AppResult<()> {
        self.bot.send_message(chat_id, text).reply_markup(keyboard).await?;
        Ok(())
    }

    async fn send_media(&self, chat_id: ChatId, kind: MediaKind, path: &Path, caption: Option<&str>) -> AppResult<()> {
        log::info!("Uploading {} {} to chat {}", kind, path.display(), chat_id);
        let file = InputFile::file(path);

        match kind {
            MediaKind::Video => {
                let mut request = self.bot.send_video(chat_id, file).supports_streaming(true);
                if let Some(caption) = caption {
                    request = request.caption(caption);
                }
                request.await?;
            }
            MediaKind::Audio => {
                let mut request = self.bot.send_audio(chat_id, file);
                if let Some(caption) = caption {
                    request = request.caption(caption);
                }
                request.await?;
            }
        }
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &CallbackQueryId, text: Option<&str>) -> AppResult<()> {
        let mut request = self.bot.answer_callback_query(callback_id.clone());
        if let Some(text) = text {
            request = request.text(text);
        }
        request.await?;
        Ok(())
    }
}
