//! LinkedIn post formatting.
//!
//! LinkedIn takes long-form text, so the template is fixed and nothing is
//! truncated. Sections are separated by blank lines; the title block is
//! skipped entirely when the bookmark has none.

use super::compose::SocialPost;

/// Hashtags carried on a LinkedIn post, at most.
const MAX_HASHTAGS: usize = 10;

/// Render the long-form LinkedIn share text.
pub fn format_linkedin_text(post: &SocialPost) -> String {
    let mut text = String::new();

    text.push_str(&post.engaging_phrase);
    text.push_str("\n\n");

    if let Some(title) = &post.title {
        text.push_str(&format!("\"{}\"\n\n", title));
    }

    text.push_str(&format!("🔗 {}\n\n", post.url));
    text.push_str(&post.summary);
    text.push_str("\n\n");

    let selected_hashtags = post
        .hashtags
        .split_whitespace()
        .take(MAX_HASHTAGS)
        .collect::<Vec<_>>()
        .join(" ");
    text.push_str(&selected_hashtags);

    text
}
