//! Read-only loader for the locally persisted history log.
//!
//! The log is written by the publishing pipeline; this side only reads it,
//! most-recent-first, bounded to [`HISTORY_CAP`] entries.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use poster_core::HistoryItem;
use serde::{Deserialize, Serialize};
use status_logging::{status_info, status_warn};

const HISTORY_FILENAME: &str = ".poster_history.ron";

/// Upper bound on loaded history entries.
pub const HISTORY_CAP: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPost {
    id: String,
    text: String,
    /// RFC 3339 timestamp.
    timestamp: String,
    post_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedHistory {
    posts: Vec<PersistedPost>,
}

/// Loads the history log from `dir`. A missing file is an empty log; a
/// malformed file is logged at warning severity and treated as empty.
pub fn load_history(dir: &Path) -> Vec<HistoryItem> {
    let path = dir.join(HISTORY_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Vec::new();
        }
        Err(err) => {
            status_warn!("Failed to read history log from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    let persisted: PersistedHistory = match ron::from_str(&content) {
        Ok(history) => history,
        Err(err) => {
            status_warn!("Failed to parse history log from {:?}: {}", path, err);
            return Vec::new();
        }
    };

    let items: Vec<HistoryItem> = persisted
        .posts
        .into_iter()
        .take(HISTORY_CAP)
        .filter_map(|post| match DateTime::parse_from_rfc3339(&post.timestamp) {
            Ok(timestamp) => Some(HistoryItem {
                id: post.id,
                text: post.text,
                timestamp: timestamp.with_timezone(&Utc),
                post_url: post.post_url,
            }),
            Err(err) => {
                status_warn!("Skipping history entry {} with bad timestamp: {}", post.id, err);
                None
            }
        })
        .collect();

    status_info!("Loaded {} history entries from {:?}", items.len(), path);
    items
}
