//! Per-chat session state.
//!
//! Each chat has at most one pending request. The state is stored by the
//! dispatcher's dialogue storage and handed to the orchestrator explicitly;
//! nothing here is global.

use std::str::FromStr;
use thiserror::Error;
use tubecore::MediaKind;

/// A submitted URL waiting for the user to pick video or audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    /// Identifies the choice prompt sent for this URL; buttons carry it back
    pub token: String,
    pub url: String,
    /// Set once the user has pressed a button
    pub kind: Option<MediaKind>,
}

impl PendingRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            token: uuid::Uuid::new_v4().simple().to_string(),
            url: url.into(),
            kind: None,
        }
    }

    /// Records the user's choice
    pub fn select(mut self, kind: MediaKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingChoice(PendingRequest),
}

impl SessionState {
    pub fn pending(&self) -> Option<&PendingRequest> {
        match self {
            SessionState::Idle => None,
            SessionState::AwaitingChoice(request) => Some(request),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceParseError {
    #[error("callback data has no separator: {0:?}")]
    MissingSeparator(String),
    #[error("unknown media kind: {0:?}")]
    UnknownKind(String),
    #[error("callback data has an empty token")]
    EmptyToken,
}

/// Payload of a video/audio button: `<kind>:<token>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceCallback {
    pub kind: MediaKind,
    pub token: String,
}

impl ChoiceCallback {
    pub fn new(kind: MediaKind, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }

    pub fn to_data(&self) -> String {
        format!("{}:{}", self.kind, self.token)
    }

    pub fn parse(data: &str) -> Result<Self, ChoiceParseError> {
        let (kind, token) = data
            .split_once(':')
            .ok_or_else(|| ChoiceParseError::MissingSeparator(data.to_string()))?;
        let kind = MediaKind::from_str(kind).map_err(|_| ChoiceParseError::UnknownKind(kind.to_string()))?;
        if token.is_empty() {
            return Err(ChoiceParseError::EmptyToken);
        }
        Ok(Self::new(kind, token))
    }

    /// True when this button belongs to the prompt of `request`
    pub fn matches(&self, request: &PendingRequest) -> bool {
        self.token == request.token
    }
}
