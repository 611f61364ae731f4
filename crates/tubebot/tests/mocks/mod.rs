//! Test doubles for the two collaborators of the request flow
//!
//! `RecordingTransport` stands in for Telegram and remembers everything sent;
//! `ScriptedFetcher` stands in for yt-dlp and replays queued results.

#![allow(dead_code)]

pub mod recording_transport;
pub mod scripted_fetcher;

pub use recording_transport::{RecordingTransport, Sent};
pub use scripted_fetcher::{output, FetchCall, ScriptedFetcher};
