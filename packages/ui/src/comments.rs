//! # Optimistic comment submission
//!
//! Comments are append-style: a provisional record built from the locally
//! decoded identity is prepended the moment the user submits, the composer
//! is cleared, and the request goes out afterwards. On success the
//! provisional record is final (a server-assigned id is adopted when one
//! comes back); on failure the record is removed again and the text handed
//! back to the composer, so a comment never lingers in the UI while absent
//! server-side and the user never loses what they typed.
//!
//! Display order is not append order: renders always sort by creation time,
//! newest first, so a provisional record whose client-clock timestamp races
//! the server-recorded ones still lands where it belongs.

use api::{Claims, Comment, CommentUser};
use chrono::{DateTime, Utc};

/// Local validation failed: nothing was sent and nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDraft;

/// Bookkeeping for one in-flight comment submission.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentFlight {
    provisional_id: String,
    /// The submitted text, restored to the composer on failure.
    pub content: String,
}

/// Validate the draft and prepend a provisional comment attributed to the
/// signed-in user. A draft that trims to nothing is rejected before any
/// network call.
pub fn submit(
    comments: &mut Vec<Comment>,
    draft: &str,
    identity: &Claims,
    at: DateTime<Utc>,
) -> Result<CommentFlight, EmptyDraft> {
    let content = draft.trim();
    if content.is_empty() {
        return Err(EmptyDraft);
    }

    let provisional_id = format!("local-{}-{}", identity.id, at.timestamp_millis());
    comments.insert(
        0,
        Comment {
            id: provisional_id.clone(),
            content: content.to_string(),
            created_at: at,
            user: Some(CommentUser {
                id: Some(identity.id.clone()),
                name: Some(identity.name.clone()),
                email: Some(identity.email.clone()),
            }),
            user_id: Some(identity.id.clone()),
        },
    );

    Ok(CommentFlight {
        provisional_id,
        content: content.to_string(),
    })
}

/// The request succeeded: the provisional record is treated as final. When
/// the server assigned an id, adopt it so later renders key on the real
/// record.
pub fn confirm(comments: &mut [Comment], flight: CommentFlight, server_id: Option<String>) {
    if let Some(server_id) = server_id {
        if let Some(comment) = comments
            .iter_mut()
            .find(|comment| comment.id == flight.provisional_id)
        {
            comment.id = server_id;
        }
    }
}

/// The request failed: remove the provisional record and hand the text
/// back for the composer.
pub fn rollback(comments: &mut Vec<Comment>, flight: CommentFlight) -> String {
    comments.retain(|comment| comment.id != flight.provisional_id);
    flight.content
}

/// Human-readable comment age: minutes, then hours, then the plain date.
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - created_at).num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} minute{} ago", if minutes == 1 { "" } else { "s" });
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours} hour{} ago", if hours == 1 { "" } else { "s" });
    }

    created_at.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn identity() -> Claims {
        Claims {
            id: "u1".into(),
            email: "ada@example.com".into(),
            name: "Ada".into(),
        }
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, h, m, 0).unwrap()
    }

    fn server_comment(id: &str, created_at: DateTime<Utc>) -> Comment {
        Comment {
            id: id.to_string(),
            content: format!("comment {id}"),
            created_at,
            user: None,
            user_id: None,
        }
    }

    #[test]
    fn test_empty_draft_rejected_without_changes() {
        let mut comments = vec![server_comment("c1", at(9, 0))];
        let before = comments.clone();

        assert_eq!(
            submit(&mut comments, "   \n\t ", &identity(), at(10, 0)),
            Err(EmptyDraft)
        );
        assert_eq!(comments, before);
    }

    #[test]
    fn test_submit_prepends_attributed_provisional_comment() {
        let mut comments = vec![server_comment("c1", at(9, 0))];

        let flight = submit(&mut comments, "  Great post!  ", &identity(), at(10, 0)).unwrap();

        assert_eq!(comments.len(), 2);
        let provisional = &comments[0];
        assert_eq!(provisional.content, "Great post!");
        assert_eq!(provisional.created_at, at(10, 0));
        assert_eq!(provisional.user_id.as_deref(), Some("u1"));
        let user = provisional.user.as_ref().unwrap();
        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
        assert_eq!(flight.content, "Great post!");
    }

    #[test]
    fn test_confirm_adopts_server_id() {
        let mut comments = Vec::new();
        let flight = submit(&mut comments, "hello", &identity(), at(10, 0)).unwrap();

        confirm(&mut comments, flight, Some("srv-9".into()));
        assert_eq!(comments[0].id, "srv-9");
    }

    #[test]
    fn test_confirm_without_server_id_keeps_provisional_record() {
        let mut comments = Vec::new();
        let flight = submit(&mut comments, "hello", &identity(), at(10, 0)).unwrap();
        let provisional = comments[0].clone();

        confirm(&mut comments, flight, None);
        assert_eq!(comments, vec![provisional]);
    }

    #[test]
    fn test_rollback_removes_provisional_and_returns_text() {
        let mut comments = vec![server_comment("c1", at(9, 0))];
        let flight = submit(&mut comments, "doomed", &identity(), at(10, 0)).unwrap();
        assert_eq!(comments.len(), 2);

        let restored = rollback(&mut comments, flight);
        assert_eq!(restored, "doomed");
        assert_eq!(comments, vec![server_comment("c1", at(9, 0))]);
    }

    #[test]
    fn test_display_order_is_newest_first_even_with_clock_skew() {
        use api::Post;

        // Arrival order: 10:00, 10:05, then a provisional one stamped 09:50
        // by a client clock running behind.
        let mut comments = vec![
            server_comment("a", at(10, 0)),
            server_comment("b", at(10, 5)),
        ];
        submit(&mut comments, "late clock", &identity(), at(9, 50)).unwrap();

        let post = Post {
            id: "p1".into(),
            title: "t".into(),
            content: String::new(),
            featured_img: None,
            status: Default::default(),
            author: None,
            author_id: None,
            created_at: at(8, 0),
            views: 0,
            reading_time: None,
            likes: Vec::new(),
            favorites: Vec::new(),
            comments,
            categories: Vec::new(),
        };

        let ordered: Vec<DateTime<Utc>> = post
            .comments_newest_first()
            .iter()
            .map(|c| c.created_at)
            .collect();
        assert_eq!(ordered, vec![at(10, 5), at(10, 0), at(9, 50)]);
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = at(12, 0);
        assert_eq!(relative_time(at(11, 59), now), "1 minute ago");
        assert_eq!(relative_time(at(11, 30), now), "30 minutes ago");
        assert_eq!(relative_time(at(9, 0), now), "3 hours ago");
        assert_eq!(
            relative_time(Utc.with_ymd_and_hms(2025, 5, 20, 12, 0, 0).unwrap(), now),
            "May 20, 2025"
        );
        assert_eq!(relative_time(now, now), "just now");
    }
}
