use chrono::{DateTime, Utc};

use crate::{
    ActiveSource, GroupStatus, HistoryItem, Phase, PublishGroup, RemoteFeedItem, ResolverState,
};

/// Upper bound on surfaced recent-activity items, regardless of source size.
pub const MAX_DISPLAY_ITEMS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStats {
    pub success_count: usize,
    pub total: usize,
    pub percentage: u8,
}

/// Progress as the consuming view must render it. An empty group list is a
/// distinct "awaiting work" state, not a 0% bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressView {
    AwaitingWork,
    Posting(ProgressStats),
}

/// Completion statistics over the publishing pipeline's group list.
pub fn progress_stats(groups: &[PublishGroup]) -> ProgressStats {
    let success_count = groups
        .iter()
        .filter(|group| group.status == GroupStatus::Success)
        .count();
    let total = groups.len();
    // max(total, 1) keeps the empty list at 0 instead of dividing by zero.
    let percentage = ((success_count as f64 / total.max(1) as f64) * 100.0).round() as u8;
    ProgressStats {
        success_count,
        total,
        percentage,
    }
}

pub fn progress_view(groups: &[PublishGroup]) -> ProgressView {
    if groups.is_empty() {
        ProgressView::AwaitingWork
    } else {
        ProgressView::Posting(progress_stats(groups))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplaySource {
    Remote,
    History,
}

/// One normalized recent-activity row, regardless of source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub source: DisplaySource,
    pub url: String,
}

/// Canonical permalink for a status id. The `/i/web/status/` form resolves
/// without knowing the author's handle.
pub fn permalink(status_id: &str) -> String {
    format!("https://x.com/i/web/status/{status_id}")
}

/// Normalizes the resolved source into at most [`MAX_DISPLAY_ITEMS`] rows.
///
/// Ordering is preserved from the input; the mapper never re-sorts. History
/// is assumed most-recent-first by its supplier.
pub fn display_items(state: &ResolverState, history: &[HistoryItem]) -> Vec<DisplayItem> {
    match state.active_source() {
        ActiveSource::Remote => state
            .remote_items()
            .iter()
            .take(MAX_DISPLAY_ITEMS)
            .map(remote_row)
            .collect(),
        ActiveSource::History => history
            .iter()
            .take(MAX_DISPLAY_ITEMS)
            .map(history_row)
            .collect(),
    }
}

fn remote_row(item: &RemoteFeedItem) -> DisplayItem {
    DisplayItem {
        id: item.id.clone(),
        text: item.text.clone(),
        created_at: item.created_at,
        source: DisplaySource::Remote,
        url: permalink(&item.id),
    }
}

fn history_row(item: &HistoryItem) -> DisplayItem {
    DisplayItem {
        id: item.id.clone(),
        text: item.text.clone(),
        created_at: item.timestamp,
        source: DisplaySource::History,
        url: item.post_url.clone(),
    }
}

/// Everything the presentation layer reads. An empty `items` list means the
/// consumer renders its explicit "no posts" placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusViewModel {
    pub progress: ProgressView,
    pub items: Vec<DisplayItem>,
    pub is_showing_history: bool,
    pub is_loading: bool,
}

impl ResolverState {
    pub fn view(&self, groups: &[PublishGroup], history: &[HistoryItem]) -> StatusViewModel {
        StatusViewModel {
            progress: progress_view(groups),
            items: display_items(self, history),
            is_showing_history: self.active_source() == ActiveSource::History,
            is_loading: self.phase() == Phase::Loading,
        }
    }
}
