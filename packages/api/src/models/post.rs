//! # Post, comment and category models
//!
//! Client-side copies of the entities the backend owns. Every copy is a
//! per-page cache: pages re-fetch on mount and no coherence is maintained
//! between them. Fields follow the backend's camelCase JSON; anything the
//! server is known to omit on some responses defaults instead of failing
//! the whole decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{Author, CommentUser};

/// Publication state of a post.
///
/// The backend writes `draft`/`published` but has been observed echoing
/// capitalised variants, so those are accepted on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    #[serde(alias = "Draft")]
    Draft,
    #[serde(alias = "Published")]
    Published,
}

impl PostStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Published => "Published",
        }
    }
}

/// A blog post as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    /// Rendered HTML from the authoring editor.
    pub content: String,
    #[serde(default)]
    pub featured_img: Option<String>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub author_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub favorites: Vec<Favorite>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
}

impl Post {
    /// Whether `user_id` has a like on record for this post.
    ///
    /// The liked/favorited booleans the views render are always derived
    /// from collection membership, never stored beside it, so the two can
    /// not drift apart during optimistic updates.
    pub fn liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|like| like.user_id == user_id)
    }

    /// Whether `user_id` has favorited this post.
    pub fn favorited_by(&self, user_id: &str) -> bool {
        self.favorites.iter().any(|fav| fav.user_id == user_id)
    }

    /// Comments in display order: newest first by creation time.
    ///
    /// Computed fresh at render time rather than relying on append order,
    /// so a provisional comment whose client-clock timestamp races the
    /// server-recorded ones still lands in the right place.
    pub fn comments_newest_first(&self) -> Vec<Comment> {
        let mut comments = self.comments.clone();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        comments
    }
}

/// A like record: unique per `(user_id, post_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub user_id: String,
    #[serde(default)]
    pub post_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A favorite record. The backend keys these by user only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub user_id: String,
}

/// A reader comment on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user: Option<CommentUser>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// An author-created category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Post-to-category association as embedded in a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub category_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn comment(id: &str, at: DateTime<Utc>) -> Comment {
        Comment {
            id: id.to_string(),
            content: format!("comment {id}"),
            created_at: at,
            user: None,
            user_id: None,
        }
    }

    #[test]
    fn test_comments_sorted_newest_first_regardless_of_arrival_order() {
        let t = |h, m| Utc.with_ymd_and_hms(2025, 6, 1, h, m, 0).unwrap();
        let post = Post {
            id: "p1".into(),
            title: "t".into(),
            content: String::new(),
            featured_img: None,
            status: PostStatus::Published,
            author: None,
            author_id: None,
            created_at: t(9, 0),
            views: 0,
            reading_time: None,
            likes: Vec::new(),
            favorites: Vec::new(),
            // arrival order: 10:00, 10:05, 09:50
            comments: vec![comment("a", t(10, 0)), comment("b", t(10, 5)), comment("c", t(9, 50))],
            categories: Vec::new(),
        };

        let sorted = post.comments_newest_first();
        let ordered: Vec<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ordered, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_liked_and_favorited_derive_from_membership() {
        let mut post = Post {
            id: "p1".into(),
            title: "t".into(),
            content: String::new(),
            featured_img: None,
            status: PostStatus::Draft,
            author: None,
            author_id: None,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
            views: 0,
            reading_time: None,
            likes: vec![Like {
                user_id: "u1".into(),
                post_id: "p1".into(),
                created_at: None,
            }],
            favorites: Vec::new(),
            comments: Vec::new(),
            categories: Vec::new(),
        };

        assert!(post.liked_by("u1"));
        assert!(!post.liked_by("u2"));
        assert!(!post.favorited_by("u1"));

        post.favorites.push(Favorite { user_id: "u1".into() });
        assert!(post.favorited_by("u1"));
    }

    #[test]
    fn test_post_decodes_with_sparse_fields() {
        let json = r#"{
            "id": "42",
            "title": "Hello",
            "content": "<p>hi</p>",
            "createdAt": "2025-06-01T09:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.status, PostStatus::Draft);
        assert!(post.likes.is_empty());
        assert!(post.comments.is_empty());
        assert!(post.featured_img.is_none());
    }

    #[test]
    fn test_status_accepts_capitalised_variants() {
        assert_eq!(
            serde_json::from_str::<PostStatus>(r#""Published""#).unwrap(),
            PostStatus::Published
        );
        assert_eq!(
            serde_json::from_str::<PostStatus>(r#""draft""#).unwrap(),
            PostStatus::Draft
        );
    }
}
