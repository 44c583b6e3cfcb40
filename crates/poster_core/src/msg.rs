#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The status view became active for the first time.
    Activated,
    /// The externally observed "posting in progress" flag was reported.
    /// A change in either direction triggers a refetch.
    PostingSignalChanged(bool),
    /// User asked for a refresh of the recent-activity list.
    RefreshRequested,
    /// The feed fetch identified by `seq` completed successfully.
    FeedLoaded {
        seq: crate::RequestSeq,
        items: Vec<crate::RemoteFeedItem>,
    },
    /// The feed fetch identified by `seq` failed; the error itself is logged
    /// by the effect runner before this message is sent.
    FeedFailed { seq: crate::RequestSeq },
    /// The owning view was torn down; late completions must be ignored.
    TornDown,
}
