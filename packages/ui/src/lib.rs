//! # ui crate — session context and optimistic interaction components
//!
//! Everything between the raw backend client and the page views:
//!
//! - [`SessionProvider`] / [`use_session`] / [`use_route_session`] — the
//!   session is derived from the token slot at every navigation boundary
//!   and injected into views, never read ad hoc.
//! - [`toggle`] and [`comments`] — pure state transitions for the
//!   optimistic like/favorite and comment mutations, testable without a
//!   network.
//! - [`LikeButton`], [`FavoriteButton`], [`CommentSection`] — the
//!   affordances that drive those transitions around real requests.
//! - [`nav`] — login redirects that record the intended destination.
//! - [`NoticeProvider`] / [`use_notice`] — dismissable outcome notices.

pub mod comments;
pub mod nav;
pub mod toggle;

mod client;
pub use client::{make_client, make_token_store};

mod session;
pub use session::{refresh_session, use_route_session, use_session, SessionProvider};

mod notice;
pub use notice::{push_error, push_success, use_notice, Notice, NoticeKind, NoticeProvider};

mod navbar;
pub use navbar::Navbar;

mod like_button;
pub use like_button::{FavoriteButton, LikeButton};

mod comment_section;
pub use comment_section::CommentSection;
