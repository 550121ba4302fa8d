//! Revalidating wrapper around the API client.
//!
//! Listing and lookup reads are cached for a bounded window and recomputed
//! on the next access after it lapses, mirroring the regeneration schedule
//! the rendered pages use: posts hourly, tags daily. Writes and auth calls
//! go through [`CachedClient::api`] untouched.

use std::time::Duration;

use devblog_api::types::{CommentsResponse, Post, PostsResponse, Tag, TagsResponse, UserDetail};
use devblog_api::{ApiError, Client, PostQuery};

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::error::BlogError;

/// Revalidation window for post listings and lookups.
pub const POST_REVALIDATE: Duration = Duration::from_secs(3600);
/// Revalidation window for tag listings and lookups. Tags change rarely.
pub const TAG_REVALIDATE: Duration = Duration::from_secs(86400);

/// API client wrapper that adds bounded read caching and maps 404s on
/// content lookups to a `None` outcome so callers can render a not-found
/// state instead of handling an error.
pub struct CachedClient {
    inner: Client,
    cache: MemoryCache,
}

impl CachedClient {
    /// Creates a client for the configured API origin.
    pub fn new(config: &Config) -> Result<Self, BlogError> {
        Self::with_base_url(&config.api_base_url)
    }

    /// Creates a client with an explicit base URL. Used for testing.
    pub fn with_base_url(base_url: &str) -> Result<Self, BlogError> {
        Ok(Self {
            inner: Client::new(base_url)?,
            cache: MemoryCache::new(),
        })
    }

    /// The underlying client, for writes and auth calls that must never be
    /// served from cache.
    pub fn api(&self) -> &Client {
        &self.inner
    }

    /// Fetches a page of posts, reusing a cached result within the window.
    pub async fn get_posts(&self, query: &PostQuery) -> Result<PostsResponse, BlogError> {
        let cache_key = format!("posts:{}", query_to_cache_key(query));

        if let Some(cached) = self.cache.get(&cache_key) {
            let resp: PostsResponse = serde_json::from_str(&cached)?;
            return Ok(resp);
        }

        let resp = self.inner.get_posts(query).await?;
        if let Ok(json) = serde_json::to_string(&resp) {
            self.cache.set(cache_key, json, POST_REVALIDATE);
        }
        Ok(resp)
    }

    /// Fetches a single post by slug, or `None` if the backend has no such
    /// post.
    pub async fn get_post(&self, slug: &str) -> Result<Option<Post>, BlogError> {
        let cache_key = format!("post:{slug}");

        if let Some(cached) = self.cache.get(&cache_key) {
            let post: Post = serde_json::from_str(&cached)?;
            return Ok(Some(post));
        }

        match optional(self.inner.get_post(slug).await)? {
            Some(post) => {
                if let Ok(json) = serde_json::to_string(&post) {
                    self.cache.set(cache_key, json, POST_REVALIDATE);
                }
                Ok(Some(post))
            }
            None => Ok(None),
        }
    }

    /// Fetches all tags, reusing a cached result within the window.
    pub async fn get_tags(&self) -> Result<TagsResponse, BlogError> {
        let cache_key = "tags".to_string();

        if let Some(cached) = self.cache.get(&cache_key) {
            let resp: TagsResponse = serde_json::from_str(&cached)?;
            return Ok(resp);
        }

        let resp = self.inner.get_tags().await?;
        if let Ok(json) = serde_json::to_string(&resp) {
            self.cache.set(cache_key, json, TAG_REVALIDATE);
        }
        Ok(resp)
    }

    /// Fetches a single tag by slug, or `None` if unknown.
    pub async fn get_tag(&self, slug: &str) -> Result<Option<Tag>, BlogError> {
        let cache_key = format!("tag:{slug}");

        if let Some(cached) = self.cache.get(&cache_key) {
            let tag: Tag = serde_json::from_str(&cached)?;
            return Ok(Some(tag));
        }

        match optional(self.inner.get_tag(slug).await)? {
            Some(tag) => {
                if let Ok(json) = serde_json::to_string(&tag) {
                    self.cache.set(cache_key, json, TAG_REVALIDATE);
                }
                Ok(Some(tag))
            }
            None => Ok(None),
        }
    }

    /// Fetches an author profile, or `None` if unknown. Profiles are not
    /// cached; the author page renders them fresh.
    pub async fn get_user(&self, id: &str) -> Result<Option<UserDetail>, BlogError> {
        optional(self.inner.get_user(id).await)
    }

    /// Fetches a post's comments. Comments are never cached.
    pub async fn get_post_comments(&self, post_id: &str) -> Result<CommentsResponse, BlogError> {
        Ok(self.inner.get_post_comments(post_id).await?)
    }

    /// Removes all cached entries.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

/// Maps a 404 to `Ok(None)`; every other failure stays an error.
fn optional<T>(result: Result<T, ApiError>) -> Result<Option<T>, BlogError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => {
            tracing::debug!("lookup returned 404, rendering as missing");
            Ok(None)
        }
        Err(err) => Err(BlogError::Api(err)),
    }
}

fn query_to_cache_key(query: &PostQuery) -> String {
    format!(
        "p{:?}:l{:?}:st{:?}:t{:?}:a{:?}:q{:?}",
        query.common.page,
        query.common.limit,
        query.status,
        query.tag_slug,
        query.author_id,
        query.search,
    )
}
