use devblog_lib::auth::{self, EmailVerification};
use devblog_lib::sitemap;
use devblog_lib::{BlogError, CachedClient, PostQuery};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn post_json(slug: &str) -> serde_json::Value {
    json!({
        "id": format!("id-{slug}"),
        "slug": slug,
        "title": "Understanding Rust Lifetimes",
        "content": "Lifetimes are the compiler's way of reasoning about how long references remain valid across function boundaries.",
        "excerpt": "A practical tour.",
        "coverImage": null,
        "status": "PUBLISHED",
        "author": { "id": "user-1", "name": "Ada Lovelace", "image": null },
        "tags": [],
        "publishedAt": "2024-01-10T09:00:00Z",
        "createdAt": "2024-01-09T12:00:00Z",
        "updatedAt": "2024-01-12T08:30:00Z"
    })
}

fn tag_json(slug: &str) -> serde_json::Value {
    json!({
        "id": format!("id-{slug}"),
        "slug": slug,
        "name": "Rust",
        "description": null,
        "createdAt": "2023-05-01T00:00:00Z",
        "updatedAt": "2024-01-02T10:00:00Z"
    })
}

fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

// -- revalidating reads --

#[tokio::test]
async fn missing_post_is_a_none_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Post not found" })))
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    let post = client.get_post("ghost").await.unwrap();
    assert!(post.is_none());
}

#[tokio::test]
async fn post_lookup_is_served_from_cache_within_the_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts/understanding-rust-lifetimes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(post_json("understanding-rust-lifetimes")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    let first = client
        .get_post("understanding-rust-lifetimes")
        .await
        .unwrap()
        .unwrap();
    let second = client
        .get_post("understanding-rust-lifetimes")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.id, second.id);
}

#[tokio::test]
async fn post_listing_is_served_from_cache_per_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [post_json("a")],
            "total": 1,
            "page": 1,
            "limit": 10
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    let query = PostQuery::default();
    let first = client.get_posts(&query).await.unwrap();
    let second = client.get_posts(&query).await.unwrap();
    assert_eq!(first.posts.len(), 1);
    assert_eq!(second.posts.len(), 1);
}

#[tokio::test]
async fn cache_clear_forces_a_refetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tags": [tag_json("rust")] })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    client.get_tags().await.unwrap();
    client.clear_cache();
    client.get_tags().await.unwrap();
}

#[tokio::test]
async fn server_errors_propagate_instead_of_mapping_to_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts/broken"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "Internal server error" })),
        )
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    let err = client.get_post("broken").await.unwrap_err();
    match err {
        BlogError::Api(api) => {
            assert_eq!(api.status, 500);
            assert_eq!(api.message, "Internal server error");
        }
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn missing_tag_and_author_are_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Tag not found" })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "User not found" })))
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    assert!(client.get_tag("ghost").await.unwrap().is_none());
    assert!(client.get_user("ghost").await.unwrap().is_none());
}

// -- auth flows --

#[tokio::test]
async fn password_reset_reports_sent_even_when_the_api_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/forget-password"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "User not found" })),
        )
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    let outcome = auth::request_password_reset(client.api(), "nobody@example.com").await;
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn password_reset_posts_the_redirect_target() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/forget-password"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "redirectTo": "/reset-password"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    auth::request_password_reset(client.api(), "ada@example.com")
        .await
        .unwrap();
}

#[tokio::test]
async fn password_reset_rejects_invalid_email_before_any_call() {
    let client = CachedClient::with_base_url(&refused_base_url()).unwrap();
    let err = auth::request_password_reset(client.api(), "not-an-email")
        .await
        .unwrap_err();
    match err {
        BlogError::Validation(errors) => {
            assert_eq!(errors[0].message, "Please enter a valid email address");
        }
        other => panic!("expected Validation error, got {other}"),
    }
}

#[tokio::test]
async fn reset_password_requires_a_token() {
    let client = CachedClient::with_base_url(&refused_base_url()).unwrap();
    let err = auth::reset_password(client.api(), None, "longenough", "longenough")
        .await
        .unwrap_err();
    match err {
        BlogError::InvalidInput(message) => {
            assert_eq!(message, "Reset token is missing. Please check your email link.");
        }
        other => panic!("expected InvalidInput, got {other}"),
    }
}

#[tokio::test]
async fn reset_password_surfaces_the_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/reset-password"))
        .and(body_json(json!({
            "newPassword": "longenough",
            "token": "tok_expired"
        })))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Token expired" })),
        )
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    let err = auth::reset_password(
        client.api(),
        Some("tok_expired"),
        "longenough",
        "longenough",
    )
    .await
    .unwrap_err();
    match err {
        BlogError::Api(api) => assert_eq!(api.message, "Token expired"),
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn reset_password_succeeds_with_valid_input() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/reset-password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    auth::reset_password(client.api(), Some("tok_ok"), "longenough", "longenough")
        .await
        .unwrap();
}

#[tokio::test]
async fn verify_email_without_token_fails_locally() {
    let client = CachedClient::with_base_url(&refused_base_url()).unwrap();
    let outcome = auth::verify_email(client.api(), None).await;
    assert_eq!(
        outcome,
        EmailVerification::Failed {
            message: "Verification token is missing. Please check your email link.".to_string()
        }
    );
}

#[tokio::test]
async fn verify_email_outcomes_follow_the_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/verify-email"))
        .and(query_param("token", "tok_good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/verify-email"))
        .and(query_param("token", "tok_bad"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Token invalid" })),
        )
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    assert_eq!(
        auth::verify_email(client.api(), Some("tok_good")).await,
        EmailVerification::Verified
    );
    assert_eq!(
        auth::verify_email(client.api(), Some("tok_bad")).await,
        EmailVerification::Failed {
            message: "Token invalid".to_string()
        }
    );
}

#[tokio::test]
async fn login_returns_the_session_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {
                "id": "user-1",
                "email": "ada@example.com",
                "name": "Ada Lovelace",
                "role": "AUTHOR"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    let user = auth::login(client.api(), "ada@example.com", "hunter2hunter2")
        .await
        .unwrap();
    assert_eq!(user.name, "Ada Lovelace");
}

#[tokio::test]
async fn current_session_distinguishes_states() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": null })))
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    let state = auth::current_session(client.api()).await;
    assert!(!state.is_authenticated());
    assert!(!state.has_session_error());

    let down = CachedClient::with_base_url(&refused_base_url()).unwrap();
    let state = auth::current_session(down.api()).await;
    assert!(state.has_session_error());
    assert!(!state.is_authenticated());
}

// -- sitemap --

#[tokio::test]
async fn sitemap_lists_static_then_posts_then_tags() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("status", "PUBLISHED"))
        .and(query_param("limit", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [post_json("lifetimes"), post_json("async")],
            "total": 2,
            "page": 1,
            "limit": 1000
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tags": [tag_json("rust")] })))
        .mount(&mock_server)
        .await;

    let client = CachedClient::with_base_url(&mock_server.uri()).unwrap();
    let entries = sitemap::build_sitemap(&client, "https://blog.example.com").await;

    assert_eq!(entries.len(), 6);
    assert_eq!(entries[3].url, "https://blog.example.com/posts/lifetimes");
    assert_eq!(entries[3].priority, 0.8);
    assert_eq!(entries[5].url, "https://blog.example.com/tags/rust");
    assert_eq!(entries[5].priority, 0.6);
}

#[tokio::test]
async fn sitemap_falls_back_to_static_routes_when_the_api_is_down() {
    let client = CachedClient::with_base_url(&refused_base_url()).unwrap();
    let entries = sitemap::build_sitemap(&client, "https://blog.example.com").await;
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| !e.url.contains("/posts/")));
}
