//! Bluesky post formatting.
//!
//! Bluesky enforces a hard 300-character limit, so the text is packed
//! greedily: header first, then as much of the summary and as many
//! hashtags as still fit. Rich-text facets are byte ranges into the post,
//! so they are extracted from the final text only, after every truncation
//! has happened. A facet computed any earlier could point past the end of
//! the published post.

use bluesky::Facet;
use lazy_static::lazy_static;
use regex::Regex;

use super::compose::SocialPost;

/// Hard per-post character limit enforced by the platform.
pub const BLUESKY_CHAR_LIMIT: usize = 300;

/// Budget for the summary block before packing.
const MAX_SUMMARY_CHARS: usize = 170;

/// Hashtags carried on a Bluesky post, at most.
const MAX_HASHTAGS: usize = 5;

lazy_static! {
    // Links: scheme through the next whitespace
    static ref URL_PATTERN: Regex = Regex::new(r"https?://\S+").unwrap();

    // Hashtags: # followed by word characters
    static ref HASHTAG_PATTERN: Regex = Regex::new(r"#(\w+)").unwrap();
}

/// Format a post for Bluesky, returning the final text together with the
/// facets describing its links and hashtags.
pub fn format_bluesky_post(post: &SocialPost) -> (String, Vec<Facet>) {
    let summary = truncate_with_ellipsis(&post.summary, MAX_SUMMARY_CHARS);

    let selected_hashtags = post
        .hashtags
        .split_whitespace()
        .take(MAX_HASHTAGS)
        .collect::<Vec<_>>()
        .join(" ");

    let mut text = match &post.title {
        Some(title) => format!("{} \"{}\"\n{}", post.engaging_phrase, title, post.url),
        None => format!("{} {}", post.engaging_phrase, post.url),
    };

    // Pack greedily below the header: summary first, hashtags after.
    // Each block spends two of its budget on the \n\n separator.
    let remaining = BLUESKY_CHAR_LIMIT.saturating_sub(text.chars().count());
    if remaining > 4 {
        text.push_str("\n\n");
        text.push_str(take_chars(&summary, remaining - 4));

        // Hashtags only ever ride along with a summary block
        let remaining = BLUESKY_CHAR_LIMIT.saturating_sub(text.chars().count());
        if remaining > 2 {
            text.push_str("\n\n");
            text.push_str(take_chars(&selected_hashtags, remaining - 2));
        }
    }

    // The limit is authoritative no matter what packing produced
    if text.chars().count() > BLUESKY_CHAR_LIMIT {
        text = truncate_with_ellipsis(&text, BLUESKY_CHAR_LIMIT);
    }

    let facets = collect_facets(&text);
    (text, facets)
}

/// Truncate to at most `limit` characters, marking any cut with `...`.
fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out: String = text.chars().take(limit.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Longest prefix of `text` holding at most `limit` characters.
fn take_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Scan the final post text for link and hashtag facets. Match offsets come
/// straight from the regex engine, so byte ranges always sit on character
/// boundaries of the scanned text.
fn collect_facets(text: &str) -> Vec<Facet> {
    let mut facets = Vec::new();

    for m in URL_PATTERN.find_iter(text) {
        facets.push(Facet::link(m.start(), m.end(), m.as_str()));
    }

    for m in HASHTAG_PATTERN.find_iter(text) {
        facets.push(Facet::tag(m.start(), m.end(), &m.as_str()[1..]));
    }

    facets
}
