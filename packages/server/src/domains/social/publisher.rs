//! Publication fan-out across social platforms.
//!
//! Every configured platform gets exactly one attempt per publish. The
//! attempts run concurrently and are fully isolated: a failing or
//! unconfigured platform never blocks, aborts, or retries the other one.

use bluesky::CreateRecordResponse;
use linkedin::UgcPostResponse;

use super::bluesky_post::{format_bluesky_post, BLUESKY_CHAR_LIMIT};
use super::compose::SocialPost;
use super::linkedin_post::format_linkedin_text;
use crate::kernel::ServerDeps;

/// Per-platform outcome of one publish attempt. `None` covers both an
/// unconfigured platform and a failed attempt; either way the pipeline
/// moves on.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub bluesky: Option<CreateRecordResponse>,
    pub linkedin: Option<UgcPostResponse>,
}

/// Publish a post to every configured platform.
pub async fn publish_all(deps: &ServerDeps, post: &SocialPost) -> PublishReport {
    tracing::debug!(?post, "Publishing to social platforms");

    let (bluesky, linkedin) =
        tokio::join!(publish_bluesky(deps, post), publish_linkedin(deps, post));

    PublishReport { bluesky, linkedin }
}

async fn publish_bluesky(deps: &ServerDeps, post: &SocialPost) -> Option<CreateRecordResponse> {
    let poster = match &deps.bluesky {
        Some(poster) => poster,
        None => {
            tracing::info!("Bluesky posting is not configured, skipping");
            return None;
        }
    };

    let (text, facets) = format_bluesky_post(post);
    tracing::info!(
        chars = text.chars().count(),
        limit = BLUESKY_CHAR_LIMIT,
        facets = facets.len(),
        "Posting to Bluesky"
    );

    if post.image_url.is_some() {
        tracing::info!("Image sharing on Bluesky requires a blob upload, posting without image");
    }

    match poster.publish(&text, facets).await {
        Ok(result) => {
            tracing::info!(uri = %result.uri, "Successfully posted to Bluesky");
            Some(result)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error posting to Bluesky");
            None
        }
    }
}

async fn publish_linkedin(deps: &ServerDeps, post: &SocialPost) -> Option<UgcPostResponse> {
    let poster = match &deps.linkedin {
        Some(poster) => poster,
        None => {
            tracing::info!("LinkedIn posting is not configured, skipping");
            return None;
        }
    };

    let text = format_linkedin_text(post);

    if post.image_url.is_some() {
        tracing::info!("Image sharing on LinkedIn requires a media upload, posting without image");
    }

    match poster.publish(&text).await {
        Ok(result) => {
            tracing::info!(share_id = ?result.id, "Successfully posted to LinkedIn");
            Some(result)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error posting to LinkedIn");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{MockBlueskyPoster, MockLinkedInPoster, TestDependencies};

    fn sample_post() -> SocialPost {
        SocialPost {
            title: Some("A Good Read".to_string()),
            url: "https://example.com/article".to_string(),
            summary: "The gist of the piece.".to_string(),
            hashtags: "#tech #rust".to_string(),
            engaging_phrase: "💡 Interesting read worth hoarding:".to_string(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn both_platforms_receive_their_rendering() {
        let testdeps = TestDependencies::new();
        let deps = testdeps.clone().into_deps();

        let report = publish_all(&deps, &sample_post()).await;

        assert!(report.bluesky.is_some());
        assert!(report.linkedin.is_some());

        let bluesky_posts = testdeps.bluesky.as_ref().unwrap().posts();
        assert_eq!(bluesky_posts.len(), 1);
        assert!(bluesky_posts[0].0.chars().count() <= BLUESKY_CHAR_LIMIT);
        assert!(!bluesky_posts[0].1.is_empty());

        let linkedin_posts = testdeps.linkedin.as_ref().unwrap().posts();
        assert_eq!(linkedin_posts.len(), 1);
        assert!(linkedin_posts[0].contains("🔗 https://example.com/article"));
    }

    #[tokio::test]
    async fn unconfigured_bluesky_is_skipped_silently() {
        let testdeps = TestDependencies::new().without_bluesky();
        let deps = testdeps.clone().into_deps();

        let report = publish_all(&deps, &sample_post()).await;

        assert!(report.bluesky.is_none());
        assert!(report.linkedin.is_some());
        assert_eq!(testdeps.linkedin.as_ref().unwrap().posts().len(), 1);
    }

    #[tokio::test]
    async fn bluesky_failure_does_not_block_linkedin() {
        let testdeps = TestDependencies::new().mock_bluesky(MockBlueskyPoster::failing());
        let deps = testdeps.clone().into_deps();

        let report = publish_all(&deps, &sample_post()).await;

        assert!(report.bluesky.is_none());
        assert!(report.linkedin.is_some());
        // The failed attempt still happened
        assert_eq!(testdeps.bluesky.as_ref().unwrap().post_count(), 1);
    }

    #[tokio::test]
    async fn linkedin_failure_does_not_block_bluesky() {
        let testdeps = TestDependencies::new().mock_linkedin(MockLinkedInPoster::failing());
        let deps = testdeps.clone().into_deps();

        let report = publish_all(&deps, &sample_post()).await;

        assert!(report.bluesky.is_some());
        assert!(report.linkedin.is_none());
    }

    #[tokio::test]
    async fn nothing_configured_publishes_nowhere() {
        let testdeps = TestDependencies::new().without_bluesky().without_linkedin();
        let deps = testdeps.clone().into_deps();

        let report = publish_all(&deps, &sample_post()).await;

        assert!(report.bluesky.is_none());
        assert!(report.linkedin.is_none());
    }
}
