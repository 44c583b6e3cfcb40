use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use status_logging::status_debug;

use crate::provider::{FeedProvider, FeedSettings, ReqwestFeedProvider};
use crate::{FeedEvent, RequestSeq};

enum FeedCommand {
    Fetch { seq: RequestSeq },
}

/// Runs feed fetches on a dedicated tokio runtime thread.
///
/// Commands go in over a channel, completions come back as [`FeedEvent`]s.
/// Completion order is whatever the network produces; callers reconcile with
/// the `seq` token.
#[derive(Clone)]
pub struct FeedHandle {
    cmd_tx: mpsc::Sender<FeedCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<FeedEvent>>>,
}

impl FeedHandle {
    pub fn new(settings: FeedSettings) -> Self {
        Self::with_provider(Arc::new(ReqwestFeedProvider::new(settings)))
    }

    pub fn with_provider(provider: Arc<dyn FeedProvider>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<FeedEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let provider = provider.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(provider.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn fetch(&self, seq: RequestSeq) {
        status_debug!("feed fetch dispatched seq={}", seq);
        let _ = self.cmd_tx.send(FeedCommand::Fetch { seq });
    }

    pub fn try_recv(&self) -> Option<FeedEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    provider: &dyn FeedProvider,
    command: FeedCommand,
    event_tx: mpsc::Sender<FeedEvent>,
) {
    match command {
        FeedCommand::Fetch { seq } => {
            let result = provider.recent_posts().await;
            status_debug!(
                "feed fetch completed seq={} ok={}",
                seq,
                result.is_ok()
            );
            let _ = event_tx.send(FeedEvent::FetchCompleted { seq, result });
        }
    }
}
