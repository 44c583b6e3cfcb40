//! Poster feed engine: remote feed fetching and effect execution.
mod handle;
mod provider;
mod types;

pub use handle::FeedHandle;
pub use provider::{FeedProvider, FeedSettings, ReqwestFeedProvider};
pub use types::{FeedError, FeedEvent, FeedFailureKind, FeedPost, RequestSeq};
