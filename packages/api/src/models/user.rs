//! # Author and commenter projections
//!
//! The backend embeds partial user records inside posts and comments. Both
//! are treated as display data: every field the server might omit is an
//! `Option`, and helpers provide the fallbacks the views render.

use serde::{Deserialize, Serialize};

/// The author record embedded in a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Author {
    /// Display name, falling back when the server sent none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown Author")
    }
}

/// The user record embedded in a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommentUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CommentUser {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Anonymous")
    }
}
