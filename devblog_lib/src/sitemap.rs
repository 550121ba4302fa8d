//! Sitemap composition: canonical URLs for the static pages plus every
//! published post and tag.

use chrono::{DateTime, Utc};
use devblog_api::types::PostStatus;
use devblog_api::{PostQuery, Query};
use serde::Serialize;

use crate::client::CachedClient;
use crate::error::BlogError;

/// Upper bound on posts fetched for the sitemap.
pub const SITEMAP_POSTS_LIMIT: i64 = 1000;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl std::fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ChangeFrequency::Daily => "daily",
                ChangeFrequency::Weekly => "weekly",
            }
        )
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
}

/// The always-present routes: home, the post index, and the tag index.
pub fn static_routes(site_url: &str) -> Vec<SitemapEntry> {
    let base = site_url.trim_end_matches('/');
    let now = Utc::now();
    vec![
        SitemapEntry {
            url: base.to_string(),
            last_modified: now,
            change_frequency: ChangeFrequency::Daily,
            priority: 1.0,
        },
        SitemapEntry {
            url: format!("{base}/posts"),
            last_modified: now,
            change_frequency: ChangeFrequency::Daily,
            priority: 0.9,
        },
        SitemapEntry {
            url: format!("{base}/tags"),
            last_modified: now,
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.7,
        },
    ]
}

/// Builds the full sitemap. When the backend cannot be reached, the static
/// routes are still returned so the sitemap never disappears entirely.
pub async fn build_sitemap(client: &CachedClient, site_url: &str) -> Vec<SitemapEntry> {
    let mut entries = static_routes(site_url);
    match dynamic_routes(client, site_url).await {
        Ok(mut dynamic) => entries.append(&mut dynamic),
        Err(err) => {
            tracing::warn!("sitemap falling back to static routes: {}", err);
        }
    }
    entries
}

async fn dynamic_routes(
    client: &CachedClient,
    site_url: &str,
) -> Result<Vec<SitemapEntry>, BlogError> {
    let base = site_url.trim_end_matches('/');

    let posts = client
        .get_posts(
            &PostQuery::default()
                .with_status(PostStatus::Published)
                .with_limit(SITEMAP_POSTS_LIMIT),
        )
        .await?;
    let tags = client.get_tags().await?;

    let mut entries = Vec::with_capacity(posts.posts.len() + tags.tags.len());
    for post in &posts.posts {
        entries.push(SitemapEntry {
            url: format!("{base}/posts/{}", post.slug),
            last_modified: post.updated_at,
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.8,
        });
    }
    for tag in &tags.tags {
        entries.push(SitemapEntry {
            url: format!("{base}/tags/{}", tag.slug),
            last_modified: tag.updated_at,
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.6,
        });
    }
    Ok(entries)
}
