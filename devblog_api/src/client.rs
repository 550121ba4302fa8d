//! HTTP client for the Devblog backend REST API.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{
    query::{PostQuery, Query},
    types::{
        AuthResponse, CommentsResponse, ForgetPasswordRequest, LoginRequest, Post, PostDraft,
        PostStatus, PostsResponse, PublishRequest, ResetPasswordRequest, SessionResponse,
        SignupRequest, Tag, TagsResponse, UploadResponse, UserDetail,
    },
    ApiError,
};

/// HTTP client for the blog backend.
///
/// Holds one connection pool with a cookie store, so the session cookie set
/// by the auth endpoints rides along on every subsequent call. The client
/// itself performs no retries, no caching, and enforces no timeout beyond
/// the transport defaults; every failure collapses into [`ApiError`].
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a new client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Url::parse(base_url).map_err(|e| {
            tracing::error!("invalid base URL '{}': {}", base_url, e);
            ApiError {
                status: 0,
                message: format!("Invalid base URL '{base_url}': {e}"),
                payload: None,
            }
        })?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| {
                tracing::error!("failed to build HTTP client: {}", e);
                ApiError::transport(&e)
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn get_url(&self, path: &str) -> Result<Url, ApiError> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("invalid URL constructed: {}", e);
            ApiError {
                status: 0,
                message: format!("Invalid request path '{path}': {e}"),
                payload: None,
            }
        })
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Drives a prepared request through the one normalization funnel.
    ///
    /// An empty 2xx body is parsed as JSON `null`, so `()` and `Option<T>`
    /// targets succeed on bodyless responses.
    async fn send<T>(&self, req: reqwest::RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let resp = req.send().await.map_err(|e| {
            tracing::error!("transport failure: {}", e);
            ApiError::transport(&e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("failed to read response body: {}", e);
            ApiError::transport(&e)
        })?;

        if !status.is_success() {
            tracing::error!(
                "request failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        let text = if body.trim().is_empty() {
            "null"
        } else {
            body.as_str()
        };
        serde_json::from_str::<T>(text).map_err(|e| {
            tracing::error!(
                "failed to parse response body: {} | body: {}",
                e,
                truncate_body(&body)
            );
            ApiError {
                status: status.as_u16(),
                message: format!("Failed to parse response body: {e}"),
                payload: None,
            }
        })
    }

    /// Sends a `GET` request.
    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path)?;
        self.send(self.request(Method::GET, url)).await
    }

    /// Sends a `GET` request with serialized query parameters.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = query.add_to_url(&self.get_url(path)?);
        self.send(self.request(Method::GET, url)).await
    }

    /// Sends a `POST` request with a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path)?;
        self.send(self.request(Method::POST, url).json(body)).await
    }

    /// Sends a `PUT` request with a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path)?;
        self.send(self.request(Method::PUT, url).json(body)).await
    }

    /// Sends a `PATCH` request with a JSON body.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path)?;
        self.send(self.request(Method::PATCH, url).json(body)).await
    }

    /// Sends a `DELETE` request.
    pub async fn delete<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path)?;
        self.send(self.request(Method::DELETE, url)).await
    }

    /// Sends a `DELETE` request carrying a JSON body (bulk operations).
    pub async fn delete_with_body<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path)?;
        self.send(self.request(Method::DELETE, url).json(body))
            .await
    }

    /// Sends a multipart form. The transport supplies the boundary
    /// content-type header; no JSON content-type is set.
    pub async fn post_form<T>(&self, path: &str, form: reqwest::multipart::Form) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path)?;
        self.send(self.request(Method::POST, url).multipart(form))
            .await
    }

    // -- Content endpoints --

    /// Fetches a page of posts matching the given query.
    pub async fn get_posts(&self, query: &PostQuery) -> Result<PostsResponse, ApiError> {
        self.get_with_query("/api/posts", query).await
    }

    /// Fetches a single post by slug or id.
    pub async fn get_post(&self, slug: &str) -> Result<Post, ApiError> {
        self.get(format!("/api/posts/{slug}").as_str()).await
    }

    /// Fetches the comments of a post.
    pub async fn get_post_comments(&self, post_id: &str) -> Result<CommentsResponse, ApiError> {
        self.get(format!("/api/posts/{post_id}/comments").as_str())
            .await
    }

    /// Fetches all tags.
    pub async fn get_tags(&self) -> Result<TagsResponse, ApiError> {
        self.get("/api/tags").await
    }

    /// Fetches a single tag by slug.
    pub async fn get_tag(&self, slug: &str) -> Result<Tag, ApiError> {
        self.get(format!("/api/tags/{slug}").as_str()).await
    }

    /// Fetches an author's public profile.
    pub async fn get_user(&self, id: &str) -> Result<UserDetail, ApiError> {
        self.get(format!("/api/users/{id}").as_str()).await
    }

    // -- Authoring endpoints --

    /// Creates a new draft post.
    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        self.post("/api/posts", draft).await
    }

    /// Replaces an existing post.
    pub async fn update_post(&self, id: &str, draft: &PostDraft) -> Result<Post, ApiError> {
        self.put(format!("/api/posts/{id}").as_str(), draft).await
    }

    /// Moves a post to a new publication state.
    pub async fn update_post_status(&self, id: &str, status: PostStatus) -> Result<Post, ApiError> {
        self.patch(
            format!("/api/posts/{id}").as_str(),
            &serde_json::json!({ "status": status }),
        )
        .await
    }

    /// Asks for editorial review of a post, with an optional note.
    pub async fn request_publish(
        &self,
        id: &str,
        request: &PublishRequest,
    ) -> Result<Value, ApiError> {
        self.post(format!("/api/posts/{id}/publish").as_str(), request)
            .await
    }

    /// Deletes a post.
    pub async fn delete_post(&self, id: &str) -> Result<Value, ApiError> {
        self.delete(format!("/api/posts/{id}").as_str()).await
    }

    /// Uploads a file (cover images) as multipart form data.
    pub async fn upload(&self, form: reqwest::multipart::Form) -> Result<UploadResponse, ApiError> {
        self.post_form("/api/upload", form).await
    }

    // -- Auth endpoints --

    /// Returns the current session, if any.
    pub async fn me(&self) -> Result<SessionResponse, ApiError> {
        self.get("/api/auth/me").await
    }

    /// Signs in with email and password. The session cookie is captured by
    /// the cookie store.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/api/auth/login", request).await
    }

    /// Registers a new account.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.post("/api/auth/signup", request).await
    }

    /// Asks the auth provider to email a password-reset link.
    pub async fn forget_password(
        &self,
        request: &ForgetPasswordRequest,
    ) -> Result<Value, ApiError> {
        self.post("/api/auth/forget-password", request).await
    }

    /// Redeems a reset token for a new password.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Value, ApiError> {
        self.post("/api/auth/reset-password", request).await
    }

    /// Redeems an email-verification token.
    pub async fn verify_email(&self, token: &str) -> Result<Value, ApiError> {
        let mut url = self.get_url("/api/auth/verify-email")?;
        url.query_pairs_mut().append_pair("token", token);
        self.send(self.request(Method::GET, url)).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
