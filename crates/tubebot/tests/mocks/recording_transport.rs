use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use teloxide::types::{CallbackQueryId, ChatId, InlineKeyboardMarkup};
use tubebot::telegram::keyboard::callback_payloads;
use tubebot::telegram::ChatTransport;
use tubecore::{AppError, AppResult, MediaKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text {
        chat_id: ChatId,
        text: String,
    },
    Choice {
        chat_id: ChatId,
        text: String,
        payloads: Vec<String>,
    },
    Media {
        chat_id: ChatId,
        kind: MediaKind,
        path: PathBuf,
        caption: Option<String>,
    },
    Answer {
        callback_id: String,
        text: Option<String>,
    },
}

#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<Sent>>,
    reject_media: AtomicBool,
    reject_prompts: AtomicBool,
    reject_answers: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `send_media` call fails, like an upload Telegram refuses
    pub fn rejecting_media() -> Self {
        let transport = Self::default();
        transport.reject_media.store(true, Ordering::SeqCst);
        transport
    }

    /// Every `send_choice` call fails, so the text handler errors out
    pub fn rejecting_prompts() -> Self {
        let transport = Self::default();
        transport.reject_prompts.store(true, Ordering::SeqCst);
        transport
    }

    /// Every `answer_callback` call fails, like a query that is too old
    pub fn rejecting_answers() -> Self {
        let transport = Self::default();
        transport.reject_answers.store(true, Ordering::SeqCst);
        transport
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn media(&self) -> Vec<(MediaKind, PathBuf)> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Media { kind, path, .. } => Some((kind, path)),
                _ => None,
            })
            .collect()
    }

    /// Toast texts of the callback answers that went through
    pub fn answers(&self) -> Vec<Option<String>> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Answer { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Callback payloads of every prompt sent, oldest first
    pub fn prompts(&self) -> Vec<Vec<String>> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Choice { payloads, .. } => Some(payloads),
                _ => None,
            })
            .collect()
    }

    /// Payload of the `kind` button on the most recent prompt
    pub fn last_button(&self, kind: MediaKind) -> String {
        let prefix = format!("{}:", kind);
        self.prompts()
            .last()
            .and_then(|payloads| payloads.iter().find(|p| p.starts_with(&prefix)).cloned())
            .expect("no prompt with that button was sent")
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> AppResult<()> {
        self.record(Sent::Text {
            chat_id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_choice(&self, chat_id: ChatId, text: &str, keyboard: InlineKeyboardMarkup) -> AppResult<()> {
        if self.reject_prompts.load(Ordering::SeqCst) {
            return Err(AppError::Validation("Bad Request: chat not found".to_string()));
        }
        self.record(Sent::Choice {
            chat_id,
            text: text.to_string(),
            payloads: callback_payloads(&keyboard),
        });
        Ok(())
    }

    async fn send_media(&self, chat_id: ChatId, kind: MediaKind, path: &Path, caption: Option<&str>) -> AppResult<()> {
        if self.reject_media.load(Ordering::SeqCst) {
            return Err(AppError::Validation("Request Entity Too Large".to_string()));
        }
        self.record(Sent::Media {
            chat_id,
            kind,
            path: path.to_path_buf(),
            caption: caption.map(str::to_string),
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &CallbackQueryId, text: Option<&str>) -> AppResult<()> {
        if self.reject_answers.load(Ordering::SeqCst) {
            return Err(AppError::Validation("Bad Request: query is too old".to_string()));
        }
        self.record(Sent::Answer {
            callback_id: callback_id.0.clone(),
            text: text.map(str::to_string),
        });
        Ok(())
    }
}
