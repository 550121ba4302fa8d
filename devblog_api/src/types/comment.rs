use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::post::PostAuthor;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,

    pub content: String,

    pub author: PostAuthor,

    pub created_at: DateTime<Utc>,
}

/// Envelope for `GET /api/posts/:postId/comments`.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentsResponse {
    #[serde(default)]
    pub comments: Vec<Comment>,
}
