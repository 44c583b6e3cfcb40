//! Headless status probe: runs one resolution cycle against the configured
//! feed endpoint and logs the resulting recent-activity view.
//!
//! The publishing pipeline is external; without one attached the progress
//! section reports "awaiting work".

mod effects;
mod history;
mod logging;

use std::sync::mpsc;
use std::time::{Duration, Instant};

use poster_core::{update, Msg, ProgressView, ResolverState};
use poster_feed::FeedSettings;
use status_logging::status_info;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::Terminal);

    let history_dir = std::env::current_dir()?;
    let history = history::load_history(&history_dir);

    let mut settings = FeedSettings::default();
    if let Ok(endpoint) = std::env::var("POSTER_FEED_ENDPOINT") {
        settings.endpoint = endpoint;
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = effects::EffectRunner::new(msg_tx, settings.clone());

    let mut state = ResolverState::new();
    // Activation triggers the first fetch; reporting the initial posting
    // signal establishes the change-detection baseline.
    for msg in [Msg::Activated, Msg::PostingSignalChanged(false)] {
        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);
    }

    let deadline = Instant::now() + settings.request_timeout + Duration::from_secs(5);
    while state.is_loading() && Instant::now() < deadline {
        match msg_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.enqueue(effects);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    let view = state.view(&[], &history);
    match view.progress {
        ProgressView::AwaitingWork => status_info!("Progress: awaiting work"),
        ProgressView::Posting(stats) => status_info!(
            "Progress: {}/{} ({}%)",
            stats.success_count,
            stats.total,
            stats.percentage
        ),
    }
    status_info!(
        "Recent activity: {} item(s), showing_history={}",
        view.items.len(),
        view.is_showing_history
    );
    if view.items.is_empty() {
        status_info!("No posts to display");
    }
    for item in &view.items {
        status_info!("  {} {} {}", item.created_at.to_rfc3339(), item.url, item.text);
    }

    Ok(())
}
