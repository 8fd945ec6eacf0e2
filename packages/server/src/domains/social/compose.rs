//! Platform-neutral post composition.
//!
//! Everything here is pure: cleaning the AI summary, rendering hashtags,
//! and assembling the intermediate [`SocialPost`] that each platform
//! formatter consumes.

use hoarder::{Bookmark, Tag};
use lazy_static::lazy_static;
use regex::Regex;

use crate::kernel::BasePhrasePicker;

/// Body used when a bookmark reaches publication with no summary at all.
pub const NO_SUMMARY_FALLBACK: &str = "No summary available";

lazy_static! {
    // Bolded "Summary:" marker some models prepend, any casing
    static ref SUMMARY_MARKER: Regex = Regex::new(r"(?i)\*\*Summary:\*\*").unwrap();

    // Boilerplate lead-in sentence observed in model output
    static ref MODEL_PREAMBLE: Regex = Regex::new(
        r"(?i)Here's a summary of the provided content, adhering to all the specified rules:"
    ).unwrap();
}

/// Strip markdown artifacts and known model boilerplate from a summary.
///
/// The bolded marker and the preamble go first, then any remaining `**`
/// delimiters, then surrounding whitespace. Already-clean text comes back
/// unchanged, so cleaning twice is the same as cleaning once.
pub fn clean_summary(summary: &str) -> String {
    let text = SUMMARY_MARKER.replace_all(summary, "");
    let text = MODEL_PREAMBLE.replace_all(&text, "");
    let text = text.replace("**", "");
    text.trim().to_string()
}

/// Render tags as a single space-joined hashtag string. Whitespace inside
/// a tag name is dropped so every tag yields one contiguous hashtag.
pub fn hashtag_string(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| format!("#{}", tag.name.split_whitespace().collect::<String>()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Intermediate post shared by every platform formatter.
#[derive(Debug, Clone)]
pub struct SocialPost {
    pub title: Option<String>,
    pub url: String,
    pub summary: String,
    pub hashtags: String,
    pub engaging_phrase: String,
    pub image_url: Option<String>,
}

/// Build the platform-neutral post from an enriched bookmark.
pub fn compose_post(bookmark: &Bookmark, phrases: &dyn BasePhrasePicker) -> SocialPost {
    // Empty strings from the store count as absent, same as null fields
    let summary = bookmark
        .summary
        .as_deref()
        .filter(|summary| !summary.is_empty())
        .unwrap_or(NO_SUMMARY_FALLBACK);

    let title = bookmark
        .content
        .title
        .as_deref()
        .filter(|title| !title.is_empty())
        .map(str::to_string);

    SocialPost {
        title,
        url: bookmark.content.url.clone(),
        summary: clean_summary(summary),
        hashtags: hashtag_string(&bookmark.tags),
        engaging_phrase: phrases.pick().to_string(),
        image_url: bookmark.content.image_url.clone(),
    }
}
