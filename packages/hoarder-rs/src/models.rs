use serde::Deserialize;

/// A bookmark as returned by the Hoarder API.
///
/// Only the fields the relay consumes are modeled; unknown fields in the
/// API response are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Bookmark {
    pub content: BookmarkContent,
    /// AI-generated summary. Absent until summarization has run.
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkContent {
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
}
