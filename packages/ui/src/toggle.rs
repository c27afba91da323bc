//! # Optimistic toggle mutations (like, favorite)
//!
//! A toggle interaction flips the signed-in user's membership in one of a
//! post's record collections *before* the network request is issued, then
//! settles when the response lands:
//!
//! ```text
//! idle --press--> pending --confirm--> idle   (flip stands, or server's
//!        flip                                  collection replaces it)
//!                  \------rollback--> idle   (collection restored exactly)
//! ```
//!
//! The functions here are pure transitions over the page's own copy of the
//! collection — no signals, no network — so "apply locally", "confirm" and
//! "rollback" are testable on their own. The components in
//! [`crate::like_button`] drive them around the actual request.
//!
//! A press by a signed-out user must never reach these functions; the
//! affordance redirects to login instead of mutating anything it would
//! have to un-mutate.

use api::{Favorite, Like};
use chrono::{DateTime, Utc};

/// A record kept in one of a post's toggle collections.
pub trait ToggleRecord: Clone {
    fn user_id(&self) -> &str;
    /// The synthetic record inserted optimistically when the toggle flips
    /// on, standing in until the server confirms or supplies its own.
    fn synthetic(user_id: &str, post_id: &str, at: DateTime<Utc>) -> Self;
}

impl ToggleRecord for Like {
    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn synthetic(user_id: &str, post_id: &str, at: DateTime<Utc>) -> Self {
        Like {
            user_id: user_id.to_string(),
            post_id: post_id.to_string(),
            created_at: Some(at),
        }
    }
}

impl ToggleRecord for Favorite {
    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn synthetic(user_id: &str, _post_id: &str, _at: DateTime<Utc>) -> Self {
        Favorite {
            user_id: user_id.to_string(),
        }
    }
}

/// Bookkeeping for one in-flight toggle request.
///
/// Carries the pre-press collection so a failed request restores it
/// exactly — including the record that was removed by an "off" press.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleFlight<R> {
    prior: Vec<R>,
}

/// Flip the user's membership immediately, before the network hears about
/// it. Inserts a synthetic record or removes the matching one, keeping the
/// one-record-per-user invariant. Returns the flight to settle once the
/// request resolves.
pub fn press<R: ToggleRecord>(
    records: &mut Vec<R>,
    user_id: &str,
    post_id: &str,
    at: DateTime<Utc>,
) -> ToggleFlight<R> {
    let flight = ToggleFlight {
        prior: records.clone(),
    };

    if records.iter().any(|record| record.user_id() == user_id) {
        records.retain(|record| record.user_id() != user_id);
    } else {
        records.push(R::synthetic(user_id, post_id, at));
    }

    flight
}

/// The request succeeded. When the server answered with an authoritative
/// collection it replaces the synthetic state (server wins on conflict);
/// otherwise the optimistic flip stands.
pub fn confirm<R: ToggleRecord>(
    records: &mut Vec<R>,
    _flight: ToggleFlight<R>,
    authoritative: Option<Vec<R>>,
) {
    if let Some(authoritative) = authoritative {
        *records = authoritative;
    }
}

/// The request failed. The collection goes back to exactly what it was
/// before the press.
pub fn rollback<R: ToggleRecord>(records: &mut Vec<R>, flight: ToggleFlight<R>) {
    *records = flight.prior;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn is_on<R: ToggleRecord>(records: &[R], user_id: &str) -> bool {
        records.iter().any(|r| r.user_id() == user_id)
    }

    #[test]
    fn test_press_inserts_synthetic_like() {
        let mut likes: Vec<Like> = Vec::new();

        press(&mut likes, "u1", "p1", now());

        assert!(is_on(&likes, "u1"));
        assert_eq!(likes.len(), 1);
        assert_eq!(likes[0].post_id, "p1");
        assert_eq!(likes[0].created_at, Some(now()));
    }

    #[test]
    fn test_two_confirmed_presses_restore_original_state() {
        let mut likes: Vec<Like> = Vec::new();

        let first = press(&mut likes, "u1", "p1", now());
        confirm(&mut likes, first, None);
        assert!(is_on(&likes, "u1"));

        let second = press(&mut likes, "u1", "p1", now());
        confirm(&mut likes, second, None);
        assert!(!is_on(&likes, "u1"));
        assert!(likes.is_empty());
    }

    #[test]
    fn test_failed_press_rolls_back_to_exact_prior_state() {
        let mut likes: Vec<Like> = Vec::new();

        let flight = press(&mut likes, "u1", "p1", now());
        assert!(is_on(&likes, "u1"));

        rollback(&mut likes, flight);
        assert!(!is_on(&likes, "u1"));
        assert!(likes.is_empty());
    }

    #[test]
    fn test_failed_off_press_restores_the_removed_record() {
        let existing = Like {
            user_id: "u1".into(),
            post_id: "p1".into(),
            created_at: Some(now()),
        };
        let mut likes = vec![existing.clone()];

        let flight = press(&mut likes, "u1", "p1", now());
        assert!(likes.is_empty());

        rollback(&mut likes, flight);
        assert_eq!(likes, vec![existing]);
    }

    #[test]
    fn test_press_never_duplicates_a_users_record() {
        let mut likes = vec![Like {
            user_id: "u1".into(),
            post_id: "p1".into(),
            created_at: None,
        }];

        // A second press while "on" removes; membership stays unique
        // throughout.
        press(&mut likes, "u1", "p1", now());
        assert!(likes.is_empty());

        press(&mut likes, "u1", "p1", now());
        assert_eq!(likes.iter().filter(|l| l.user_id == "u1").count(), 1);
    }

    #[test]
    fn test_confirm_adopts_authoritative_collection() {
        let mut likes: Vec<Like> = Vec::new();

        let flight = press(&mut likes, "u1", "p1", now());
        let server = vec![
            Like {
                user_id: "u1".into(),
                post_id: "p1".into(),
                created_at: Some(now()),
            },
            Like {
                user_id: "u2".into(),
                post_id: "p1".into(),
                created_at: None,
            },
        ];

        confirm(&mut likes, flight, Some(server.clone()));
        assert_eq!(likes, server);
    }

    #[test]
    fn test_other_users_records_survive_a_press() {
        let mut favorites = vec![Favorite { user_id: "u2".into() }];

        let flight = press(&mut favorites, "u1", "p1", now());
        assert!(is_on(&favorites, "u1"));
        assert!(is_on(&favorites, "u2"));

        rollback(&mut favorites, flight);
        assert!(!is_on(&favorites, "u1"));
        assert!(is_on(&favorites, "u2"));
    }
}
