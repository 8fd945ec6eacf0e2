use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Record `$type` for feed posts.
pub const POST_RECORD_TYPE: &str = "app.bsky.feed.post";

/// Collection the relay writes post records into.
pub const POST_COLLECTION: &str = "app.bsky.feed.post";

#[derive(Debug, Serialize)]
pub struct CreateSessionRequest {
    pub identifier: String,
    pub password: String,
}

/// Session handle returned by `com.atproto.server.createSession`.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    #[serde(rename = "accessJwt")]
    pub access_jwt: String,
    pub did: String,
}

/// A rich-text annotation over a byte range of the post text.
///
/// Offsets index into the UTF-8 bytes of the final post text. The AT
/// protocol rejects facets whose ranges do not fall on valid boundaries,
/// so they must be produced from the exact string that is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    pub index: ByteSlice,
    pub features: Vec<FacetFeature>,
}

impl Facet {
    pub fn link(byte_start: usize, byte_end: usize, uri: impl Into<String>) -> Self {
        Self {
            index: ByteSlice {
                byte_start,
                byte_end,
            },
            features: vec![FacetFeature::Link { uri: uri.into() }],
        }
    }

    pub fn tag(byte_start: usize, byte_end: usize, tag: impl Into<String>) -> Self {
        Self {
            index: ByteSlice {
                byte_start,
                byte_end,
            },
            features: vec![FacetFeature::Tag { tag: tag.into() }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ByteSlice {
    #[serde(rename = "byteStart")]
    pub byte_start: usize,
    #[serde(rename = "byteEnd")]
    pub byte_end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "$type")]
pub enum FacetFeature {
    #[serde(rename = "app.bsky.richtext.facet#link")]
    Link { uri: String },
    #[serde(rename = "app.bsky.richtext.facet#tag")]
    Tag { tag: String },
}

/// The post record submitted through `com.atproto.repo.createRecord`.
#[derive(Debug, Serialize)]
pub struct PostRecord {
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "$type")]
    pub record_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<Vec<Facet>>,
}

impl PostRecord {
    /// Build a post record timestamped now. An empty facet list is omitted
    /// from the serialized record entirely.
    pub fn new(text: impl Into<String>, facets: Vec<Facet>) -> Self {
        Self {
            text: text.into(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            record_type: POST_RECORD_TYPE.to_string(),
            facets: if facets.is_empty() {
                None
            } else {
                Some(facets)
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateRecordRequest {
    pub repo: String,
    pub collection: String,
    pub record: PostRecord,
}

/// Reference to the created post record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordResponse {
    pub uri: String,
    pub cid: String,
}
