//! Poster core: pure resolver state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    ActiveSource, GroupStatus, HistoryItem, Phase, PublishGroup, RemoteFeedItem, RequestSeq,
    ResolverState,
};
pub use update::update;
pub use view_model::{
    display_items, permalink, progress_stats, progress_view, DisplayItem, DisplaySource,
    ProgressStats, ProgressView, StatusViewModel, MAX_DISPLAY_ITEMS,
};
