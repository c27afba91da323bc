//! # HTTP client for the Blogify backend
//!
//! [`ApiClient`] owns the base URL, a [`reqwest::Client`], and the token
//! slot, and exposes one typed method per backend endpoint. It is generic
//! over [`TokenStore`] so the same client runs against `localStorage` in
//! the browser and an in-memory slot in tests.
//!
//! ## Auth handling
//!
//! Endpoints that need a bearer token read it from the store at call time.
//! When the store is empty the call short-circuits with
//! [`ApiError::Unauthenticated`] before any request is built — a guaranteed
//! 401 round trip is never issued. When the server answers 401 the stored
//! token is cleared on the spot, so the next session derivation reads
//! signed-out.
//!
//! ## Delivery semantics
//!
//! Every call is at-most-once: no retries, no queueing. Callers decide
//! whether to re-issue, and the optimistic layer decides what to roll back.

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use store::TokenStore;

use crate::error::ApiError;
use crate::models::{Category, Favorite, Like, Post, PostStatus};
use crate::session::{derive_session, Session};

/// The deployed backend. Overridable at construction for tests and
/// alternate deployments.
pub const DEFAULT_BASE_URL: &str = "https://blogify-backend-sxn5.onrender.com/v1/api";

#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    base_url: String,
    http: reqwest::Client,
    tokens: S,
}

/// Fields for `POST posts/create`. The author id is filled in from the
/// stored token's claims, the way the backend expects it.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub featured_img: Option<String>,
    pub status: PostStatus,
}

/// Fields for `PUT posts/:id`.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
    pub featured_img: Option<String>,
    pub status: PostStatus,
    pub category_id: Option<String>,
}

/// Toggle endpoints may answer with an authoritative collection; when they
/// do, it replaces the client's synthetic record (server wins).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToggleAck {
    #[serde(default)]
    pub likes: Option<Vec<Like>>,
    #[serde(default)]
    pub favorites: Option<Vec<Favorite>>,
}

/// `POST comments/` may answer with the server-assigned id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentAck {
    #[serde(default)]
    pub id: Option<String>,
}

/// List endpoints answer either `{"data": [...]}` or a bare array,
/// depending on the route. Both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PostList {
    Wrapped { data: Vec<Post> },
    Bare(Vec<Post>),
}

impl PostList {
    pub fn into_vec(self) -> Vec<Post> {
        match self {
            PostList::Wrapped { data } => data,
            PostList::Bare(posts) => posts,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PostEnvelope {
    post: Post,
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    #[serde(default)]
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryCreated {
    Wrapped { category: Category },
    Bare(Category),
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Debug, Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl<S: TokenStore> ApiClient<S> {
    pub fn new(tokens: S) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, tokens)
    }

    pub fn with_base_url(base_url: impl Into<String>, tokens: S) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            tokens,
        }
    }

    /// The token slot this client reads and maintains.
    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Session derived from the current token slot contents.
    pub fn session(&self) -> Session {
        derive_session(self.tokens.get().as_deref())
    }

    /// Drop the stored token. Logout is purely client-side: the backend
    /// keeps no session state beyond the token it issued.
    pub fn logout(&self) {
        self.tokens.clear();
    }

    // ---- users ----

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "name, email and password are required".into(),
            ));
        }

        self.send(
            Method::POST,
            "users/register",
            Some(json!({ "name": name, "email": email, "password": password })),
            false,
        )
        .await?;
        Ok(())
    }

    /// Log in and store the returned bearer token, replacing any previous
    /// one. Returns the session derived from the new token.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::Validation("email and password are required".into()));
        }

        let resp = self
            .send(
                Method::POST,
                "users/login",
                Some(json!({ "email": email, "password": password })),
                false,
            )
            .await?;
        let login: LoginResponse = decode(resp).await?;

        self.tokens.set(&login.token);
        Ok(derive_session(Some(&login.token)))
    }

    // ---- posts ----

    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let resp = self.send(Method::GET, "posts", None, false).await?;
        let list: PostList = decode(resp).await?;
        Ok(list.into_vec())
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        let resp = self
            .send(Method::GET, &format!("posts/{id}"), None, false)
            .await?;
        let envelope: PostEnvelope = decode(resp).await?;
        Ok(envelope.post)
    }

    pub async fn posts_by_author(&self, author_id: &str) -> Result<Vec<Post>, ApiError> {
        let resp = self
            .send(Method::GET, &format!("posts/author/{author_id}"), None, true)
            .await?;
        let list: PostList = decode(resp).await?;
        Ok(list.into_vec())
    }

    pub async fn create_post(&self, draft: &PostDraft) -> Result<(), ApiError> {
        let session = self.session();
        let Some(author_id) = session.user_id() else {
            return Err(ApiError::Unauthenticated);
        };

        let title = draft.title.trim();
        let content = draft.content.trim();
        if title.is_empty() {
            return Err(ApiError::Validation("title is required".into()));
        }
        if content.is_empty() {
            return Err(ApiError::Validation("content is required".into()));
        }

        self.send(
            Method::POST,
            "posts/create",
            Some(json!({
                "title": title,
                "content": content,
                "authorId": author_id,
                "featuredImg": draft.featured_img,
                "status": draft.status,
            })),
            true,
        )
        .await?;
        Ok(())
    }

    pub async fn update_post(&self, id: &str, update: &PostUpdate) -> Result<(), ApiError> {
        let title = update.title.trim();
        let content = update.content.trim();
        if title.is_empty() {
            return Err(ApiError::Validation("title is required".into()));
        }
        if content.is_empty() {
            return Err(ApiError::Validation("content is required".into()));
        }

        self.send(
            Method::PUT,
            &format!("posts/{id}"),
            Some(json!({
                "title": title,
                "content": content,
                "featuredImg": update.featured_img,
                "status": update.status,
                "categoryId": update.category_id,
            })),
            true,
        )
        .await?;
        Ok(())
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, &format!("posts/{id}"), None, true)
            .await?;
        Ok(())
    }

    // ---- likes / favorites / comments ----

    pub async fn toggle_like(&self, post_id: &str) -> Result<ToggleAck, ApiError> {
        let resp = self
            .send(
                Method::POST,
                "likes/toggle",
                Some(json!({ "postId": post_id })),
                true,
            )
            .await?;
        // Some deployments answer with just a message; an ack with no
        // collections is still a confirmation.
        Ok(resp.json().await.unwrap_or_default())
    }

    pub async fn toggle_favorite(&self, post_id: &str) -> Result<ToggleAck, ApiError> {
        let resp = self
            .send(
                Method::POST,
                "favorites/toggle",
                Some(json!({ "postId": post_id })),
                true,
            )
            .await?;
        Ok(resp.json().await.unwrap_or_default())
    }

    pub async fn create_comment(
        &self,
        post_id: &str,
        content: &str,
    ) -> Result<CommentAck, ApiError> {
        if self.tokens.get().is_none() {
            return Err(ApiError::Unauthenticated);
        }
        let content = content.trim();
        if content.is_empty() {
            return Err(ApiError::Validation("comment cannot be empty".into()));
        }

        let resp = self
            .send(
                Method::POST,
                "comments/",
                Some(json!({ "postId": post_id, "content": content })),
                true,
            )
            .await?;
        Ok(resp.json().await.unwrap_or_default())
    }

    // ---- categories ----

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let resp = self.send(Method::GET, "categories", None, false).await?;
        let envelope: CategoriesEnvelope = decode(resp).await?;
        Ok(envelope.categories)
    }

    pub async fn create_category(&self, name: &str) -> Result<Category, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("category name is required".into()));
        }

        let resp = self
            .send(Method::POST, "categories", Some(json!({ "name": name })), true)
            .await?;
        let created: CategoryCreated = decode(resp).await?;
        Ok(match created {
            CategoryCreated::Wrapped { category } => category,
            CategoryCreated::Bare(category) => category,
        })
    }

    pub async fn add_category_to_post(
        &self,
        post_id: &str,
        category_id: &str,
    ) -> Result<(), ApiError> {
        self.send(
            Method::POST,
            "categories/add/post",
            Some(json!({ "postId": post_id, "categoryId": category_id })),
            true,
        )
        .await?;
        Ok(())
    }

    // ---- transport ----

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        needs_auth: bool,
    ) -> Result<Response, ApiError> {
        let token = self.tokens.get();
        if needs_auth && token.is_none() {
            // Don't bother the network with a guaranteed 401.
            return Err(ApiError::Unauthenticated);
        }

        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut request = self.http.request(method, url.as_str());
        if needs_auth {
            if let Some(ref token) = token {
                request = request.bearer_auth(token);
            }
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        tracing::debug!(%url, "issuing request");
        let resp = request.send().await.map_err(|err| {
            tracing::error!(%url, error = %err, "request did not complete");
            ApiError::Network(err.to_string())
        })?;

        self.classify(resp).await
    }

    async fn classify(&self, resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = server_message(resp, status).await;
        tracing::warn!(status = %status, %message, "request rejected");

        Err(match status {
            StatusCode::UNAUTHORIZED => {
                // The token itself is no good. Drop it so the next
                // navigation derives a signed-out session.
                self.tokens.clear();
                ApiError::TokenRejected { message }
            }
            StatusCode::FORBIDDEN => ApiError::Forbidden { message },
            StatusCode::NOT_FOUND => ApiError::NotFound,
            _ => ApiError::Rejected {
                status: status.as_u16(),
                message,
            },
        })
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json()
        .await
        .map_err(|err| ApiError::Network(format!("invalid response body: {err}")))
}

async fn server_message(resp: Response, status: StatusCode) -> String {
    let body: ErrorBody = resp.json().await.unwrap_or_default();
    body.message
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use store::{MemoryTokenStore, TokenStore};

    // Points at a closed local port: any test that reaches the network
    // fails fast with ApiError::Network instead of hanging.
    fn client() -> ApiClient<MemoryTokenStore> {
        ApiClient::with_base_url("http://127.0.0.1:9/v1/api", MemoryTokenStore::new())
    }

    fn signed_in_client() -> ApiClient<MemoryTokenStore> {
        let client = client();
        let payload = URL_SAFE_NO_PAD.encode(r#"{"id":"u1","email":"a@b.c","name":"Ada"}"#);
        client.tokens().set(&format!("h.{payload}.s"));
        client
    }

    #[tokio::test]
    async fn test_toggle_without_token_short_circuits() {
        let client = client();
        assert_eq!(
            client.toggle_like("p1").await.unwrap_err(),
            ApiError::Unauthenticated
        );
        assert_eq!(
            client.toggle_favorite("p1").await.unwrap_err(),
            ApiError::Unauthenticated
        );
    }

    #[tokio::test]
    async fn test_comment_without_token_short_circuits() {
        let client = client();
        assert_eq!(
            client.create_comment("p1", "hello").await.unwrap_err(),
            ApiError::Unauthenticated
        );
    }

    #[tokio::test]
    async fn test_author_listing_without_token_short_circuits() {
        let client = client();
        assert_eq!(
            client.posts_by_author("u1").await.unwrap_err(),
            ApiError::Unauthenticated
        );
    }

    #[tokio::test]
    async fn test_empty_comment_rejected_before_network() {
        let client = signed_in_client();
        assert_eq!(
            client.create_comment("p1", "   \n ").await.unwrap_err(),
            ApiError::Validation("comment cannot be empty".into())
        );
    }

    #[tokio::test]
    async fn test_create_post_requires_title_and_content() {
        let client = signed_in_client();
        let draft = PostDraft {
            title: "  ".into(),
            content: "body".into(),
            ..Default::default()
        };
        assert!(matches!(
            client.create_post(&draft).await.unwrap_err(),
            ApiError::Validation(_)
        ));

        let draft = PostDraft {
            title: "Title".into(),
            content: "".into(),
            ..Default::default()
        };
        assert!(matches!(
            client.create_post(&draft).await.unwrap_err(),
            ApiError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_login_rejects_empty_credentials_locally() {
        let client = client();
        assert!(matches!(
            client.login("", "pw").await.unwrap_err(),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            client.login("a@b.c", "").await.unwrap_err(),
            ApiError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_transport_failure_classified_as_network() {
        let client = signed_in_client();
        assert!(matches!(
            client.toggle_like("p1").await.unwrap_err(),
            ApiError::Network(_)
        ));
        // A transport failure is not a token problem; the slot keeps its
        // token.
        assert!(client.tokens().get().is_some());
    }

    #[test]
    fn test_post_list_accepts_both_envelope_shapes() {
        let wrapped = r#"{"data":[{"id":"1","title":"a","content":"","createdAt":"2025-06-01T09:00:00Z"}]}"#;
        let bare = r#"[{"id":"2","title":"b","content":"","createdAt":"2025-06-01T09:00:00Z"}]"#;

        let list: PostList = serde_json::from_str(wrapped).unwrap();
        assert_eq!(list.into_vec()[0].id, "1");

        let list: PostList = serde_json::from_str(bare).unwrap();
        assert_eq!(list.into_vec()[0].id, "2");
    }

    #[test]
    fn test_toggle_ack_tolerates_message_only_bodies() {
        let ack: ToggleAck = serde_json::from_str(r#"{"message":"Liked!"}"#).unwrap();
        assert!(ack.likes.is_none());
        assert!(ack.favorites.is_none());

        let ack: ToggleAck =
            serde_json::from_str(r#"{"likes":[{"userId":"u1","postId":"p1"}]}"#).unwrap();
        assert_eq!(ack.likes.unwrap()[0].user_id, "u1");
    }

    #[test]
    fn test_logout_clears_the_slot() {
        let client = signed_in_client();
        assert!(client.session().authenticated());
        client.logout();
        assert!(!client.session().authenticated());
        assert!(client.tokens().get().is_none());
    }
}
