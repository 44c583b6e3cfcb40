#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Ask the feed engine to fetch recent posts. `seq` must be echoed back
    /// in the resulting `FeedLoaded`/`FeedFailed` message.
    FetchFeed { seq: crate::RequestSeq },
}
