use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::tag::Tag;

/// Publication state of a post. The backend stores these uppercase.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PostStatus::Draft => "DRAFT",
                PostStatus::Published => "PUBLISHED",
                PostStatus::Archived => "ARCHIVED",
            }
        )
    }
}

impl FromStr for PostStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            "archived" => Ok(PostStatus::Archived),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,

    pub slug: String,

    pub title: String,

    pub content: String,

    pub excerpt: Option<String>,

    pub cover_image: Option<String>,

    pub status: PostStatus,

    pub author: PostAuthor,

    #[serde(default)]
    pub tags: Vec<Tag>,

    pub published_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Author summary embedded in a post.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    pub id: String,

    pub name: String,

    pub image: Option<String>,
}

/// Envelope for `GET /api/posts`.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostsResponse {
    #[serde(default)]
    pub posts: Vec<Post>,

    #[serde(default)]
    pub total: i64,

    #[serde(default)]
    pub page: i64,

    #[serde(default)]
    pub limit: i64,
}

/// Body for creating or updating a post.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,

    pub content: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body for requesting publication of a post.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
