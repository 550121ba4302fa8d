//! SEO metadata builders for the rendered pages.
//!
//! These produce the data the page templates feed into `<head>` tags; no
//! HTML is rendered here.

use chrono::{DateTime, Utc};
use devblog_api::types::{Post, Tag, UserDetail};

pub const SITE_NAME: &str = "Technical Blog";

/// Maximum description length when falling back to raw post content.
pub const DESCRIPTION_MAX_LENGTH: usize = 160;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub open_graph: Option<OpenGraph>,
    pub twitter: Option<TwitterCard>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OgType {
    Article,
    Website,
    Profile,
}

impl std::fmt::Display for OgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OgType::Article => "article",
                OgType::Website => "website",
                OgType::Profile => "profile",
            }
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub og_type: OgType,
    pub published_time: Option<DateTime<Utc>>,
    pub modified_time: Option<DateTime<Utc>>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
    pub images: Vec<OgImage>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwitterCardKind {
    Summary,
    SummaryLargeImage,
}

impl std::fmt::Display for TwitterCardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TwitterCardKind::Summary => "summary",
                TwitterCardKind::SummaryLargeImage => "summary_large_image",
            }
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: TwitterCardKind,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Metadata for a post detail page.
pub fn post_metadata(post: &Post) -> PageMetadata {
    let description = post_description(post);
    let images = post
        .cover_image
        .iter()
        .filter(|url| !url.is_empty())
        .map(|url| OgImage {
            url: url.clone(),
            width: 1200,
            height: 630,
            alt: post.title.clone(),
        })
        .collect::<Vec<_>>();

    PageMetadata {
        title: format!("{} | {}", post.title, SITE_NAME),
        description: description.clone(),
        open_graph: Some(OpenGraph {
            title: post.title.clone(),
            description: description.clone(),
            og_type: OgType::Article,
            published_time: post.published_at.or(Some(post.created_at)),
            modified_time: Some(post.updated_at),
            authors: vec![post.author.name.clone()],
            tags: post.tags.iter().map(|t| t.name.clone()).collect(),
            images: images.clone(),
        }),
        twitter: Some(TwitterCard {
            card: TwitterCardKind::SummaryLargeImage,
            title: post.title.clone(),
            description,
            images: images.into_iter().map(|i| i.url).collect(),
        }),
    }
}

/// Metadata for a tag page listing `post_count` published posts.
pub fn tag_metadata(tag: &Tag, post_count: usize) -> PageMetadata {
    let description = tag
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "Explore {} articles about {} on our technical blog.",
                post_count, tag.name
            )
        });

    PageMetadata {
        title: format!("{} | {}", tag.name, SITE_NAME),
        description: description.clone(),
        open_graph: Some(OpenGraph {
            title: tag.name.clone(),
            description: description.clone(),
            og_type: OgType::Website,
            published_time: None,
            modified_time: None,
            authors: Vec::new(),
            tags: Vec::new(),
            images: Vec::new(),
        }),
        twitter: Some(TwitterCard {
            card: TwitterCardKind::Summary,
            title: tag.name.clone(),
            description,
            images: Vec::new(),
        }),
    }
}

/// Metadata for an author page listing `post_count` published posts.
pub fn author_metadata(author: &UserDetail, post_count: usize) -> PageMetadata {
    let name = author.name.as_deref().filter(|n| !n.is_empty());
    let description = author
        .profile
        .as_ref()
        .and_then(|p| p.bio.as_deref())
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "Read {} articles by {} on our technical blog.",
                post_count,
                name.unwrap_or("this author")
            )
        });
    let images: Vec<String> = author
        .image
        .iter()
        .filter(|url| !url.is_empty())
        .cloned()
        .collect();

    PageMetadata {
        title: format!("{} | {}", name.unwrap_or("Author"), SITE_NAME),
        description: description.clone(),
        open_graph: Some(OpenGraph {
            title: name.unwrap_or("Author").to_string(),
            description: description.clone(),
            og_type: OgType::Profile,
            published_time: None,
            modified_time: None,
            authors: Vec::new(),
            tags: Vec::new(),
            images: images
                .iter()
                .map(|url| OgImage {
                    url: url.clone(),
                    width: 0,
                    height: 0,
                    alt: name.unwrap_or("Author").to_string(),
                })
                .collect(),
        }),
        twitter: Some(TwitterCard {
            card: TwitterCardKind::Summary,
            title: name.unwrap_or("Author").to_string(),
            description,
            images,
        }),
    }
}

/// Metadata for a missing resource of the given display kind.
pub fn not_found_metadata(kind: &str) -> PageMetadata {
    PageMetadata {
        title: format!("{kind} Not Found"),
        description: String::new(),
        open_graph: None,
        twitter: None,
    }
}

/// The post's excerpt when present and non-empty, else its leading content.
fn post_description(post: &Post) -> String {
    post.excerpt
        .as_deref()
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| truncate_chars(&post.content, DESCRIPTION_MAX_LENGTH))
}

fn truncate_chars(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}
