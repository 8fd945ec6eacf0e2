//! Summary enrichment before publication.

use hoarder::Bookmark;

use crate::kernel::BaseBookmarkStore;

/// True when the bookmark carries a usable summary. The store reports a
/// pending summary as either `null` or an empty string, so both count as
/// missing.
pub fn has_summary(bookmark: &Bookmark) -> bool {
    bookmark.summary.as_deref().is_some_and(|s| !s.is_empty())
}

/// Make sure a bookmark carries a summary before it is composed into a post.
///
/// Bookmarks that already have a non-empty one pass through untouched.
/// Otherwise the store is asked to summarize exactly once; when that fails,
/// or the reply still has no summary, the bookmark is returned as-is and
/// publication proceeds with a degraded post. Publication is never blocked
/// on summarization.
pub async fn ensure_summary(
    store: &dyn BaseBookmarkStore,
    bookmark_id: &str,
    bookmark: Bookmark,
) -> Bookmark {
    if has_summary(&bookmark) {
        return bookmark;
    }

    tracing::info!(
        bookmark_id = %bookmark_id,
        "Bookmark is tagged but has no summary, requesting one"
    );

    match store.request_summarization(bookmark_id).await {
        Ok(updated) if has_summary(&updated) => updated,
        Ok(_) => {
            tracing::warn!(
                bookmark_id = %bookmark_id,
                "Summarization finished without a summary, continuing without one"
            );
            bookmark
        }
        Err(e) => {
            tracing::error!(
                bookmark_id = %bookmark_id,
                error = %e,
                "Error requesting summarization"
            );
            bookmark
        }
    }
}
