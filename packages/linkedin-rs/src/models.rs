use serde::{Deserialize, Serialize};

/// Payload for `POST /v2/ugcPosts`.
///
/// Field names mirror the UGC API exactly, including the dotted map keys
/// LinkedIn uses for content type and visibility.
#[derive(Debug, Serialize)]
pub struct UgcPostRequest {
    pub author: String,
    #[serde(rename = "lifecycleState")]
    pub lifecycle_state: String,
    #[serde(rename = "specificContent")]
    pub specific_content: SpecificContent,
    pub visibility: Visibility,
}

impl UgcPostRequest {
    /// A published, public, text-only share by the given member URN.
    pub fn text_share(author_urn: &str, text: impl Into<String>) -> Self {
        Self {
            author: format!("urn:li:person:{author_urn}"),
            lifecycle_state: "PUBLISHED".to_string(),
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareCommentary { text: text.into() },
                    share_media_category: "NONE".to_string(),
                },
            },
            visibility: Visibility {
                member_network_visibility: "PUBLIC".to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent,
}

#[derive(Debug, Serialize)]
pub struct ShareContent {
    #[serde(rename = "shareCommentary")]
    pub share_commentary: ShareCommentary,
    #[serde(rename = "shareMediaCategory")]
    pub share_media_category: String,
}

#[derive(Debug, Serialize)]
pub struct ShareCommentary {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub member_network_visibility: String,
}

/// Response body of a successful ugcPosts call.
#[derive(Debug, Clone, Deserialize)]
pub struct UgcPostResponse {
    /// Share URN of the created post, e.g. `urn:li:share:12345`.
    #[serde(default)]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_share_serializes_to_ugc_shape() {
        let request = UgcPostRequest::text_share("AbC123", "Hello network");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "author": "urn:li:person:AbC123",
                "lifecycleState": "PUBLISHED",
                "specificContent": {
                    "com.linkedin.ugc.ShareContent": {
                        "shareCommentary": {"text": "Hello network"},
                        "shareMediaCategory": "NONE"
                    }
                },
                "visibility": {
                    "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"
                }
            })
        );
    }
}
