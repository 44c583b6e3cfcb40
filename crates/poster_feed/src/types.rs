use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Fencing token carried from trigger to completion, assigned by the caller.
pub type RequestSeq = u64;

/// One recent post as returned by the feed endpoint, newest-first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedPost {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Completion report from the feed engine back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    FetchCompleted {
        seq: RequestSeq,
        result: Result<Vec<FeedPost>, FeedError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FeedError {
    pub kind: FeedFailureKind,
    pub message: String,
}

impl FeedError {
    pub(crate) fn new(kind: FeedFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedFailureKind {
    #[error("invalid endpoint")]
    InvalidEndpoint,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("invalid body")]
    InvalidBody,
    #[error("network error")]
    Network,
}
