use serde::Deserialize;

use super::{ValidationError, require_non_blank};

/// Body of `POST /users/{userId}/posts`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostDTO {
    pub content: String,
    #[serde(default)]
    pub is_public: bool,
}

impl CreatePostDTO {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank(&self.content, "content")
    }
}

/// Body of `PUT /posts/{postId}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostDTO {
    pub user_id: String,
    pub content: String,
}

impl UpdatePostDTO {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank(&self.user_id, "userId")?;
        require_non_blank(&self.content, "content")
    }
}

/// Body of `DELETE /posts/{postId}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostDTO {
    pub user_id: String,
}

impl DeletePostDTO {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank(&self.user_id, "userId")
    }
}

/// Query of `GET /posts/search`. A missing `content` searches for "".
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub content: String,
}
