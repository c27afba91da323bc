//! # api crate — typed client for the Blogify backend
//!
//! Everything the frontends need to talk to the remote REST API lives here.
//! The backend owns all persistence and business rules; this crate is the
//! client-side contract with it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — one typed method per endpoint, bearer-token attachment, local short-circuit when signed out |
//! | [`error`] | [`ApiError`] — failure classification by required UI reaction |
//! | [`models`] | Posts, comments, likes, favorites, categories, embedded user projections |
//! | [`session`] | Claim decoding from the stored token, [`Session`] derivation |
//!
//! The token slot itself belongs to the `store` crate; this crate only
//! reads, fills (on login) and clears (on logout / 401) it.

pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use client::{ApiClient, CommentAck, PostDraft, PostUpdate, ToggleAck, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use models::{Author, Category, CategoryRef, Comment, CommentUser, Favorite, Like, Post, PostStatus};
pub use session::{decode_claims, derive_session, Claims, Session};
