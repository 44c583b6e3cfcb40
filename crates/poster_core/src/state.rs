use chrono::{DateTime, Utc};

/// Monotonic token identifying one fetch request.
pub type RequestSeq = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupStatus {
    Pending,
    Posting,
    Success,
    Failed,
}

/// One batch of images posted together as a single publishing step.
///
/// Owned and mutated by the publishing pipeline; the core only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishGroup {
    pub id: String,
    pub images: Vec<String>,
    pub status: GroupStatus,
    pub error: Option<String>,
    pub retry_count: u32,
}

/// A recent post as reported by the live remote feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFeedItem {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A completed post from the local history log, most-recent-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub post_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
}

/// Which source is currently authoritative for recent activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSource {
    Remote,
    History,
}

/// Resolver state: which source is live, what the remote feed last returned,
/// and the fencing token for the in-flight fetch.
///
/// Transitioned only through [`crate::update`]; observers read snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverState {
    phase: Phase,
    active_source: ActiveSource,
    remote_items: Vec<RemoteFeedItem>,
    request_seq: RequestSeq,
    last_posting_signal: Option<bool>,
    torn_down: bool,
}

impl Default for ResolverState {
    fn default() -> Self {
        // History is authoritative until the first resolution lands, so the
        // operator sees local history instead of an empty remote list.
        Self {
            phase: Phase::Idle,
            active_source: ActiveSource::History,
            remote_items: Vec::new(),
            request_seq: 0,
            last_posting_signal: None,
            torn_down: false,
        }
    }
}

impl ResolverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_source(&self) -> ActiveSource {
        self.active_source
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn remote_items(&self) -> &[RemoteFeedItem] {
        &self.remote_items
    }

    pub fn request_seq(&self) -> RequestSeq {
        self.request_seq
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Starts a new fetch cycle and returns its fencing token.
    ///
    /// Any response carrying an older token is stale and must be discarded.
    pub(crate) fn begin_fetch(&mut self) -> RequestSeq {
        self.request_seq += 1;
        self.phase = Phase::Loading;
        self.request_seq
    }

    /// True when `seq` identifies the one in-flight request that is still
    /// allowed to resolve. Duplicate completions for an already resolved
    /// request fail the phase check.
    pub(crate) fn is_current(&self, seq: RequestSeq) -> bool {
        self.phase == Phase::Loading && seq == self.request_seq
    }

    pub(crate) fn resolve_remote(&mut self, items: Vec<RemoteFeedItem>) {
        self.phase = Phase::Ready;
        self.active_source = ActiveSource::Remote;
        self.remote_items = items;
    }

    pub(crate) fn resolve_history(&mut self) {
        self.phase = Phase::Ready;
        self.active_source = ActiveSource::History;
        self.remote_items.clear();
    }

    /// Records the posting signal and reports whether its value changed.
    ///
    /// The first observation establishes the baseline and does not count as
    /// a change; activation already fetched at that point.
    pub(crate) fn observe_posting_signal(&mut self, value: bool) -> bool {
        let changed = match self.last_posting_signal {
            Some(previous) => previous != value,
            None => false,
        };
        self.last_posting_signal = Some(value);
        changed
    }

    pub(crate) fn mark_torn_down(&mut self) {
        self.torn_down = true;
    }
}
