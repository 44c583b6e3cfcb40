use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use poster_core::{Effect, Msg, RemoteFeedItem};
use poster_feed::{FeedEvent, FeedHandle, FeedPost, FeedSettings};
use status_logging::{status_info, status_warn};

/// Executes core effects against the feed engine and forwards completions
/// back to the update loop as messages.
pub struct EffectRunner {
    feed: FeedHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: FeedSettings) -> Self {
        let runner = Self {
            feed: FeedHandle::new(settings),
        };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchFeed { seq } => {
                    status_info!("FetchFeed seq={}", seq);
                    self.feed.fetch(seq);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let feed = self.feed.clone();
        thread::spawn(move || loop {
            if let Some(event) = feed.try_recv() {
                let FeedEvent::FetchCompleted { seq, result } = event;
                let msg = match result {
                    Ok(posts) => {
                        if posts.is_empty() {
                            status_info!(
                                "Remote feed returned no items (seq={}); history fallback applies",
                                seq
                            );
                        }
                        Msg::FeedLoaded {
                            seq,
                            items: posts.into_iter().map(map_post).collect(),
                        }
                    }
                    Err(err) => {
                        // Absorbed into the history fallback; warn is as loud
                        // as this ever gets.
                        status_warn!("Feed fetch failed (seq={}): {}", seq, err);
                        Msg::FeedFailed { seq }
                    }
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_post(post: FeedPost) -> RemoteFeedItem {
    RemoteFeedItem {
        id: post.id,
        text: post.text,
        created_at: post.created_at,
    }
}
