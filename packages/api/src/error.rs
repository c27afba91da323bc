//! # Failure classification for backend calls
//!
//! Every error a page can see is one of these variants, chosen by how the
//! UI has to react rather than by HTTP detail. The important split is
//! between a missing/rejected token (bounce to login), a privilege problem
//! (message, keep the token), and a transport failure (notice, roll back
//! optimistic state). All of them are caught at the triggering action and
//! turned into user-facing notices; nothing propagates to a global handler.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// An authenticated call was attempted with no stored token. Raised
    /// locally — the request never leaves the client.
    #[error("you need to sign in first")]
    Unauthenticated,

    /// The server rejected the token itself (HTTP 401). The client clears
    /// the stored token when this is raised; the user must sign in again.
    #[error("your session has expired, please sign in again")]
    TokenRejected { message: String },

    /// Token accepted but the action is not allowed (HTTP 403), e.g.
    /// editing another author's post. The token stays.
    #[error("{message}")]
    Forbidden { message: String },

    /// The referenced entity does not exist server-side (HTTP 404).
    /// Rendered as an empty/placeholder state, not a hard failure.
    #[error("not found")]
    NotFound,

    /// Any other server-side rejection, with the server's `message` when
    /// the body carried one.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Rejected before any network call by local input validation.
    #[error("{0}")]
    Validation(String),

    /// The request never completed: connection refused, DNS failure, or an
    /// unreadable response body.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Whether the right reaction is a redirect to the login page.
    pub fn needs_login(&self) -> bool {
        matches!(self, ApiError::Unauthenticated | ApiError::TokenRejected { .. })
    }
}
