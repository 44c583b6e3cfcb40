use crate::{Effect, Msg, Phase, ResolverState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ResolverState, msg: Msg) -> (ResolverState, Vec<Effect>) {
    if state.is_torn_down() {
        // Nothing may mutate state or start work after teardown.
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Activated => {
            if state.phase() == Phase::Idle {
                let seq = state.begin_fetch();
                vec![Effect::FetchFeed { seq }]
            } else {
                Vec::new()
            }
        }
        Msg::PostingSignalChanged(value) => {
            if state.observe_posting_signal(value) {
                // A change while Loading supersedes the in-flight request:
                // the sequence bump makes the older response stale.
                let seq = state.begin_fetch();
                vec![Effect::FetchFeed { seq }]
            } else {
                Vec::new()
            }
        }
        Msg::RefreshRequested => {
            if state.phase() == Phase::Loading {
                // Reentrant manual trigger, rejected even when the UI-side
                // disable-while-loading guard is bypassed.
                Vec::new()
            } else {
                let seq = state.begin_fetch();
                vec![Effect::FetchFeed { seq }]
            }
        }
        Msg::FeedLoaded { seq, items } => {
            if state.is_current(seq) {
                if items.is_empty() {
                    // Empty success routes through the history fallback,
                    // same as a failure.
                    state.resolve_history();
                } else {
                    state.resolve_remote(items);
                }
            }
            Vec::new()
        }
        Msg::FeedFailed { seq } => {
            if state.is_current(seq) {
                state.resolve_history();
            }
            Vec::new()
        }
        Msg::TornDown => {
            state.mark_torn_down();
            Vec::new()
        }
    };

    (state, effects)
}
