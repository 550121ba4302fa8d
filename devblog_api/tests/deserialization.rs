use devblog_api::types::{
    CommentsResponse, Post, PostStatus, PostsResponse, TagsResponse, UserDetail,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn posts_response_deserializes() {
    let resp: PostsResponse = serde_json::from_str(&load_fixture("posts.json")).unwrap();
    assert_eq!(resp.posts.len(), 2);
    assert_eq!(resp.total, 2);
    assert_eq!(resp.page, 1);
    assert_eq!(resp.limit, 10);

    let first = &resp.posts[0];
    assert_eq!(first.status, PostStatus::Published);
    assert_eq!(first.tags.len(), 1);
    assert_eq!(first.tags[0].slug, "rust");
    assert_eq!(
        first.cover_image.as_deref(),
        Some("https://cdn.example.com/covers/lifetimes.jpg")
    );

    // Nullable fields stay absent rather than defaulting to empty strings.
    let second = &resp.posts[1];
    assert!(second.excerpt.is_none());
    assert!(second.cover_image.is_none());
    assert!(second.tags.is_empty());
}

#[test]
fn single_post_deserializes() {
    let post: Post = serde_json::from_str(&load_fixture("post.json")).unwrap();
    assert_eq!(post.id, "post-1");
    assert_eq!(post.author.id, "user-1");
    assert!(post.published_at.is_some());
    assert!(post.published_at.unwrap() < post.updated_at);
}

#[test]
fn posts_response_tolerates_missing_envelope_fields() {
    let resp: PostsResponse = serde_json::from_str(r#"{"posts": []}"#).unwrap();
    assert!(resp.posts.is_empty());
    assert_eq!(resp.total, 0);
}

#[test]
fn tags_response_deserializes() {
    let resp: TagsResponse = serde_json::from_str(&load_fixture("tags.json")).unwrap();
    assert_eq!(resp.tags.len(), 2);
    assert_eq!(resp.tags[0].name, "Rust");
    assert!(resp.tags[1].description.is_none());
}

#[test]
fn comments_response_deserializes() {
    let resp: CommentsResponse = serde_json::from_str(&load_fixture("comments.json")).unwrap();
    assert_eq!(resp.comments.len(), 1);
    assert_eq!(resp.comments[0].author.name, "Linus Reader");
}

#[test]
fn user_detail_deserializes() {
    let user: UserDetail = serde_json::from_str(&load_fixture("user.json")).unwrap();
    assert_eq!(user.name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(
        user.profile.unwrap().bio.as_deref(),
        Some("Writes about compilers and the people who argue with them.")
    );
}

#[test]
fn user_detail_tolerates_sparse_profiles() {
    let user: UserDetail = serde_json::from_str(r#"{"id": "user-9", "name": null}"#).unwrap();
    assert!(user.name.is_none());
    assert!(user.profile.is_none());
    assert!(user.image.is_none());
}

#[test]
fn post_status_round_trips_as_uppercase() {
    assert_eq!(
        serde_json::to_string(&PostStatus::Published).unwrap(),
        "\"PUBLISHED\""
    );
    let status: PostStatus = serde_json::from_str("\"ARCHIVED\"").unwrap();
    assert_eq!(status, PostStatus::Archived);
}
