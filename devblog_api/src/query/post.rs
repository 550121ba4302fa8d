use url::Url;

use crate::types::PostStatus;

use super::common::{Query, QueryCommon};

/// Query builder for `GET /api/posts`.
#[derive(Default)]
pub struct PostQuery {
    pub common: QueryCommon,
    pub status: Option<PostStatus>,
    pub tag_slug: Option<String>,
    pub author_id: Option<String>,
    pub search: Option<String>,
}

impl Query for PostQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(status) = self.status {
            url.query_pairs_mut()
                .append_pair("status", status.to_string().as_str());
        }
        if let Some(tag_slug) = &self.tag_slug {
            url.query_pairs_mut()
                .append_pair("tagSlug", tag_slug.as_str());
        }
        if let Some(author_id) = &self.author_id {
            url.query_pairs_mut()
                .append_pair("authorId", author_id.as_str());
        }
        if let Some(search) = &self.search {
            url.query_pairs_mut().append_pair("search", search.as_str());
        }
        url
    }
}

impl PostQuery {
    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_tag_slug(mut self, tag_slug: &str) -> Self {
        self.tag_slug = Some(tag_slug.to_string());
        self
    }

    pub fn with_author_id(mut self, author_id: &str) -> Self {
        self.author_id = Some(author_id.to_string());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::{
        query::{PostQuery, Query},
        types::PostStatus,
    };

    #[test]
    fn default_query_adds_nothing() {
        let url = Url::parse("https://example.com/api/posts").unwrap();
        let out = PostQuery::default().add_to_url(&url);
        assert_eq!(out.as_str(), "https://example.com/api/posts");
    }

    #[test]
    fn unset_fields_are_omitted() {
        let url = Url::parse("https://example.com/api/posts").unwrap();
        let out = PostQuery::default().with_page(1).add_to_url(&url);
        assert_eq!(out.as_str(), "https://example.com/api/posts?page=1");
        assert!(!out.as_str().contains("status"));
        assert!(!out.as_str().contains("limit"));
    }

    #[test]
    fn set_fields_appear_in_declaration_order() {
        let url = Url::parse("https://example.com/api/posts").unwrap();
        let out = PostQuery::default()
            .with_page(1)
            .with_limit(10)
            .with_status(PostStatus::Published)
            .with_tag_slug("rust")
            .with_author_id("user-1")
            .with_search("lifetimes")
            .add_to_url(&url);
        assert_eq!(
            out.as_str(),
            "https://example.com/api/posts?page=1&limit=10&status=PUBLISHED&tagSlug=rust&authorId=user-1&search=lifetimes"
        );
    }

    #[test]
    fn values_are_coerced_to_strings() {
        let url = Url::parse("https://example.com/api/posts").unwrap();
        let out = PostQuery::default()
            .with_page(3)
            .with_limit(100)
            .add_to_url(&url);
        assert_eq!(out.as_str(), "https://example.com/api/posts?page=3&limit=100");
    }

    #[test]
    fn search_values_are_percent_encoded() {
        let url = Url::parse("https://example.com/api/posts").unwrap();
        let out = PostQuery::default()
            .with_search("async rust")
            .add_to_url(&url);
        assert_eq!(
            out.as_str(),
            "https://example.com/api/posts?search=async+rust"
        );
    }
}
