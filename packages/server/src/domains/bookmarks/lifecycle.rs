//! In-memory lifecycle tracking for bookmarks.
//!
//! A bookmark id lives in the tracker exactly while its lifecycle is
//! unfinished: inserted on `created`, advanced on `crawled`, removed right
//! after the publish attempt triggered by `ai tagged`. Entries never expire
//! on their own; a bookmark that never reaches tagging stays tracked for
//! the life of the process.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Where a tracked bookmark sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkStatus {
    /// Seen a `created` event, waiting for the crawler.
    Created,
    /// Crawled without a summary; summarization has been requested.
    Summarizing,
    /// A summary is known to exist.
    Summarized,
}

/// Process-wide map from bookmark id to lifecycle status, plus one async
/// lock per id so a fetch-decide-update sequence never interleaves with a
/// duplicate delivery for the same bookmark. Distinct ids proceed
/// concurrently.
pub struct LifecycleTracker {
    entries: RwLock<HashMap<String, BookmarkStatus>>,
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl Default for LifecycleTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleTracker {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Serialize event handling for one bookmark id. Hold the returned
    /// guard across the whole read-decide-write sequence.
    pub async fn guard(&self, bookmark_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            locks
                .entry(bookmark_id.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Start tracking a bookmark at [`BookmarkStatus::Created`]. Re-creation
    /// of a known id resets its status.
    pub fn track_created(&self, bookmark_id: &str) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(bookmark_id.to_string(), BookmarkStatus::Created);
    }

    pub fn status(&self, bookmark_id: &str) -> Option<BookmarkStatus> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(bookmark_id)
            .copied()
    }

    pub fn is_tracked(&self, bookmark_id: &str) -> bool {
        self.status(bookmark_id).is_some()
    }

    pub fn set_status(&self, bookmark_id: &str, status: BookmarkStatus) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(bookmark_id.to_string(), status);
    }

    /// Forget a bookmark once its publish attempt has run. Also drops the
    /// per-id lock; a duplicate event racing this release acquires a fresh
    /// lock and then finds the id untracked.
    pub fn untrack(&self, bookmark_id: &str) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(bookmark_id);
        self.locks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(bookmark_id);
    }

    /// Number of bookmarks currently mid-lifecycle.
    pub fn tracked_count(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}
