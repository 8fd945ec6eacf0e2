//! Webhook event processing.
//!
//! One handler per lifecycle operation. Every handler for an id-scoped
//! sequence takes the tracker guard first, so duplicate deliveries of the
//! same bookmark are serialized instead of racing the fetch-decide-update
//! steps.

use anyhow::{Context, Result};

use crate::domains::bookmarks::enrichment::{ensure_summary, has_summary};
use crate::domains::bookmarks::lifecycle::BookmarkStatus;
use crate::domains::social::compose::compose_post;
use crate::domains::social::publisher::publish_all;
use crate::kernel::ServerDeps;

/// Route one webhook event to its handler. Unknown operations are dropped.
pub async fn process_webhook(deps: &ServerDeps, bookmark_id: &str, operation: &str) -> Result<()> {
    match operation {
        "created" => {
            handle_created(deps, bookmark_id);
            Ok(())
        }
        "crawled" => handle_crawled(deps, bookmark_id).await,
        "ai tagged" => handle_tagged(deps, bookmark_id).await,
        other => {
            tracing::debug!(
                bookmark_id = %bookmark_id,
                operation = %other,
                "Ignoring unhandled webhook operation"
            );
            Ok(())
        }
    }
}

/// A new bookmark: start tracking it through its enrichment lifecycle.
fn handle_created(deps: &ServerDeps, bookmark_id: &str) {
    deps.tracker.track_created(bookmark_id);
    tracing::info!(bookmark_id = %bookmark_id, "Bookmark created and being tracked");
}

/// A crawl finished: decide whether summarization is still needed.
async fn handle_crawled(deps: &ServerDeps, bookmark_id: &str) -> Result<()> {
    let _guard = deps.tracker.guard(bookmark_id).await;

    if !deps.tracker.is_tracked(bookmark_id) {
        tracing::debug!(bookmark_id = %bookmark_id, "Crawled bookmark is not tracked, dropping");
        return Ok(());
    }

    let bookmark = deps
        .bookmark_store
        .fetch_bookmark(bookmark_id)
        .await
        .context("Failed to fetch crawled bookmark")?;

    if !has_summary(&bookmark) {
        tracing::info!(bookmark_id = %bookmark_id, "Requesting AI summarization");
        // Outcome only logged; the summary is re-read when tagging fires
        if let Err(e) = deps.bookmark_store.request_summarization(bookmark_id).await {
            tracing::error!(
                bookmark_id = %bookmark_id,
                error = %e,
                "Error requesting summarization"
            );
        }
        deps.tracker
            .set_status(bookmark_id, BookmarkStatus::Summarizing);
    } else {
        deps.tracker
            .set_status(bookmark_id, BookmarkStatus::Summarized);
        tracing::info!(bookmark_id = %bookmark_id, "Bookmark already has a summary");
    }

    Ok(())
}

/// Tagging is the last enrichment step: compose the post, fan it out to
/// the social platforms, and stop tracking the bookmark.
async fn handle_tagged(deps: &ServerDeps, bookmark_id: &str) -> Result<()> {
    let _guard = deps.tracker.guard(bookmark_id).await;

    if !deps.tracker.is_tracked(bookmark_id) {
        tracing::debug!(bookmark_id = %bookmark_id, "Tagged bookmark is not tracked, dropping");
        return Ok(());
    }

    // A fetch failure leaves the entry tracked, so a redelivery of the
    // tagged event can still publish
    let bookmark = deps
        .bookmark_store
        .fetch_bookmark(bookmark_id)
        .await
        .context("Failed to fetch tagged bookmark")?;

    let bookmark = ensure_summary(deps.bookmark_store.as_ref(), bookmark_id, bookmark).await;
    let post = compose_post(&bookmark, deps.phrases.as_ref());
    let report = publish_all(deps, &post).await;

    tracing::info!(
        bookmark_id = %bookmark_id,
        bluesky = report.bluesky.is_some(),
        linkedin = report.linkedin.is_some(),
        "Finished publishing tagged bookmark"
    );

    // One publish attempt per lifecycle, successful or not
    deps.tracker.untrack(bookmark_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{sample_bookmark, MockBookmarkStore, TestDependencies};

    #[tokio::test]
    async fn created_starts_tracking() {
        let deps = TestDependencies::new().into_deps();

        process_webhook(&deps, "bm1", "created").await.unwrap();

        assert_eq!(deps.tracker.status("bm1"), Some(BookmarkStatus::Created));
    }

    #[tokio::test]
    async fn crawled_for_an_untracked_bookmark_is_dropped() {
        let testdeps = TestDependencies::new();
        let deps = testdeps.clone().into_deps();

        process_webhook(&deps, "bm1", "crawled").await.unwrap();

        assert!(testdeps.bookmark_store.fetch_calls().is_empty());
        assert!(!deps.tracker.is_tracked("bm1"));
    }

    #[tokio::test]
    async fn crawled_without_summary_requests_summarization() {
        let testdeps = TestDependencies::new().mock_store(
            MockBookmarkStore::new().with_bookmark("bm1", sample_bookmark(None, &[])),
        );
        let deps = testdeps.clone().into_deps();

        process_webhook(&deps, "bm1", "created").await.unwrap();
        process_webhook(&deps, "bm1", "crawled").await.unwrap();

        assert_eq!(testdeps.bookmark_store.summarize_calls(), vec!["bm1".to_string()]);
        assert_eq!(deps.tracker.status("bm1"), Some(BookmarkStatus::Summarizing));
    }

    #[tokio::test]
    async fn crawled_with_empty_summary_requests_summarization() {
        let testdeps = TestDependencies::new().mock_store(
            MockBookmarkStore::new().with_bookmark("bm1", sample_bookmark(Some(""), &[])),
        );
        let deps = testdeps.clone().into_deps();

        process_webhook(&deps, "bm1", "created").await.unwrap();
        process_webhook(&deps, "bm1", "crawled").await.unwrap();

        assert_eq!(testdeps.bookmark_store.summarize_calls(), vec!["bm1".to_string()]);
        assert_eq!(deps.tracker.status("bm1"), Some(BookmarkStatus::Summarizing));
    }

    #[tokio::test]
    async fn crawled_with_summary_skips_summarization() {
        let testdeps = TestDependencies::new().mock_store(
            MockBookmarkStore::new().with_bookmark("bm1", sample_bookmark(Some("Done."), &[])),
        );
        let deps = testdeps.clone().into_deps();

        process_webhook(&deps, "bm1", "created").await.unwrap();
        process_webhook(&deps, "bm1", "crawled").await.unwrap();

        assert!(testdeps.bookmark_store.summarize_calls().is_empty());
        assert_eq!(deps.tracker.status("bm1"), Some(BookmarkStatus::Summarized));
    }

    #[tokio::test]
    async fn failed_summarization_request_still_marks_summarizing() {
        let testdeps = TestDependencies::new().mock_store(
            MockBookmarkStore::new()
                .with_bookmark("bm1", sample_bookmark(None, &[]))
                .failing_summarize(),
        );
        let deps = testdeps.clone().into_deps();

        process_webhook(&deps, "bm1", "created").await.unwrap();
        process_webhook(&deps, "bm1", "crawled").await.unwrap();

        assert_eq!(deps.tracker.status("bm1"), Some(BookmarkStatus::Summarizing));
    }

    #[tokio::test]
    async fn crawled_fetch_failure_leaves_status_unchanged() {
        let testdeps =
            TestDependencies::new().mock_store(MockBookmarkStore::new().failing_fetch());
        let deps = testdeps.clone().into_deps();

        process_webhook(&deps, "bm1", "created").await.unwrap();
        let result = process_webhook(&deps, "bm1", "crawled").await;

        assert!(result.is_err());
        assert_eq!(deps.tracker.status("bm1"), Some(BookmarkStatus::Created));
    }

    #[tokio::test]
    async fn tagged_for_an_untracked_bookmark_is_dropped() {
        let testdeps = TestDependencies::new();
        let deps = testdeps.clone().into_deps();

        process_webhook(&deps, "bm1", "ai tagged").await.unwrap();

        assert!(testdeps.bookmark_store.fetch_calls().is_empty());
        assert_eq!(testdeps.bluesky.as_ref().unwrap().post_count(), 0);
    }

    #[tokio::test]
    async fn tagged_publishes_and_stops_tracking() {
        let testdeps = TestDependencies::new().mock_store(
            MockBookmarkStore::new()
                .with_bookmark("bm1", sample_bookmark(Some("The gist."), &["tech", "ai"])),
        );
        let deps = testdeps.clone().into_deps();

        process_webhook(&deps, "bm1", "created").await.unwrap();
        process_webhook(&deps, "bm1", "ai tagged").await.unwrap();

        assert_eq!(testdeps.bluesky.as_ref().unwrap().post_count(), 1);
        assert_eq!(testdeps.linkedin.as_ref().unwrap().posts().len(), 1);
        assert!(!deps.tracker.is_tracked("bm1"));
    }

    #[tokio::test]
    async fn tagged_with_empty_summary_enriches_before_publishing() {
        let testdeps = TestDependencies::new().mock_store(
            MockBookmarkStore::new()
                .with_bookmark("bm1", sample_bookmark(Some(""), &["tech"]))
                .with_summarize_result("bm1", sample_bookmark(Some("A real summary."), &["tech"])),
        );
        let deps = testdeps.clone().into_deps();

        process_webhook(&deps, "bm1", "created").await.unwrap();
        process_webhook(&deps, "bm1", "ai tagged").await.unwrap();

        assert_eq!(testdeps.bookmark_store.summarize_calls().len(), 1);
        let linkedin_posts = testdeps.linkedin.as_ref().unwrap().posts();
        assert_eq!(linkedin_posts.len(), 1);
        assert!(linkedin_posts[0].contains("A real summary."));
        assert!(!deps.tracker.is_tracked("bm1"));
    }

    #[tokio::test]
    async fn tagged_fetch_failure_keeps_the_bookmark_tracked() {
        let testdeps =
            TestDependencies::new().mock_store(MockBookmarkStore::new().failing_fetch());
        let deps = testdeps.clone().into_deps();

        process_webhook(&deps, "bm1", "created").await.unwrap();
        let result = process_webhook(&deps, "bm1", "ai tagged").await;

        assert!(result.is_err());
        assert!(deps.tracker.is_tracked("bm1"));
        assert_eq!(testdeps.bluesky.as_ref().unwrap().post_count(), 0);
    }

    #[tokio::test]
    async fn tagged_untracks_even_when_no_platform_is_configured() {
        let testdeps = TestDependencies::new()
            .without_bluesky()
            .without_linkedin()
            .mock_store(
                MockBookmarkStore::new()
                    .with_bookmark("bm1", sample_bookmark(Some("The gist."), &[])),
            );
        let deps = testdeps.clone().into_deps();

        process_webhook(&deps, "bm1", "created").await.unwrap();
        process_webhook(&deps, "bm1", "ai tagged").await.unwrap();

        assert!(!deps.tracker.is_tracked("bm1"));
    }

    #[tokio::test]
    async fn unknown_operations_are_ignored() {
        let testdeps = TestDependencies::new();
        let deps = testdeps.clone().into_deps();

        process_webhook(&deps, "bm1", "edited").await.unwrap();

        assert!(testdeps.bookmark_store.fetch_calls().is_empty());
        assert!(!deps.tracker.is_tracked("bm1"));
    }

    #[tokio::test]
    async fn full_lifecycle_runs_created_crawled_tagged() {
        let testdeps = TestDependencies::new().mock_store(
            MockBookmarkStore::new()
                .with_bookmark("bm1", sample_bookmark(None, &["tech"]))
                .with_summarize_result("bm1", sample_bookmark(Some("Summarized now."), &["tech"])),
        );
        let deps = testdeps.clone().into_deps();

        process_webhook(&deps, "bm1", "created").await.unwrap();
        process_webhook(&deps, "bm1", "crawled").await.unwrap();
        assert_eq!(deps.tracker.status("bm1"), Some(BookmarkStatus::Summarizing));

        process_webhook(&deps, "bm1", "ai tagged").await.unwrap();

        // Crawl requested one summarization, tagging requested another
        // because the stored bookmark still had none
        assert_eq!(testdeps.bookmark_store.summarize_calls().len(), 2);

        let bluesky_posts = testdeps.bluesky.as_ref().unwrap().posts();
        assert_eq!(bluesky_posts.len(), 1);
        assert!(bluesky_posts[0].0.contains("Summarized now."));
        assert!(!deps.tracker.is_tracked("bm1"));
    }
}
