//! tubebot - Telegram front end for tubecore
//!
//! Takes a YouTube link from a chat, asks whether the user wants the video or
//! the audio track, downloads it with yt-dlp and sends the file back.
//!
//! # Module Structure
//!
//! - `cli`: command line interface
//! - `messages`: user-facing texts
//! - `session`: per-chat pending request state
//! - `orchestrator`: the URL → choice → download → delivery flow
//! - `telegram`: bot setup, handler tree, and the chat transport

pub mod cli;
pub mod messages;
pub mod orchestrator;
pub mod session;
pub mod telegram;

pub use orchestrator::{ChoiceOutcome, DeliveryReport, RequestOrchestrator};
pub use session::{ChoiceCallback, PendingRequest, SessionState};
