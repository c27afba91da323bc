//! # Session derivation from the stored bearer token
//!
//! The backend issues JWTs whose payload carries the signed-in user's
//! `{id, email, name}`. The client reads those claims purely for display:
//! whose avatar initial to draw, which author id to fetch, what name to put
//! on a provisional comment. Nothing here is a security boundary — the
//! signature is never checked and expiry is never inspected. The server
//! re-validates the full token on every authenticated request, and a stale
//! token simply surfaces later as a rejected call.
//!
//! Presence of a decodable token is what "signed in" means to the UI.
//! Derivation is pure and cheap, so it is recomputed from the token slot at
//! every navigation boundary instead of being cached anywhere.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Claims embedded in the token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl Claims {
    /// Single-letter initial for avatar circles.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// What the UI knows about the current visitor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub identity: Option<Claims>,
}

impl Session {
    pub fn authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.identity.as_ref().map(|claims| claims.id.as_str())
    }
}

/// Derive the session from whatever is (or is not) in the token slot.
///
/// A malformed token reads the same as no token at all — storage holding
/// garbage must leave the views rendering the signed-out state, not crash
/// them.
pub fn derive_session(token: Option<&str>) -> Session {
    Session {
        identity: token.and_then(decode_claims),
    }
}

/// Decode the payload segment of a three-segment token.
///
/// Returns `None` for anything that is not `header.payload.signature` with
/// a base64url payload parsing as a JSON object carrying at least an `id`.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return None,
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an unsigned token the way the backend's payloads look.
    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{header}.{body}.signature")
    }

    #[test]
    fn test_decodes_identity_from_well_formed_token() {
        let token =
            token_with_payload(r#"{"id":"u1","email":"ada@example.com","name":"Ada"}"#);
        let session = derive_session(Some(&token));

        assert!(session.authenticated());
        let claims = session.identity.unwrap();
        assert_eq!(claims.id, "u1");
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.name, "Ada");
        assert_eq!(claims.initial(), 'A');
    }

    #[test]
    fn test_absent_token_is_signed_out() {
        let session = derive_session(None);
        assert!(!session.authenticated());
        assert!(session.identity.is_none());
    }

    #[test]
    fn test_malformed_tokens_read_as_signed_out() {
        let cases: Vec<String> = vec![
            "".into(),
            "not-a-token".into(),
            "only.two".into(),
            "one.two.three.four".into(),
            "head.!!!not-base64!!!.sig".into(),
            // valid base64, not JSON
            format!("h.{}.s", URL_SAFE_NO_PAD.encode("plain text")),
            // JSON but not an object with an id
            token_with_payload(r#"[1,2,3]"#),
            token_with_payload(r#"{"email":"x@y.z"}"#),
        ];

        for token in &cases {
            let session = derive_session(Some(token.as_str()));
            assert!(
                !session.authenticated(),
                "token {token:?} should not authenticate"
            );
        }
    }

    #[test]
    fn test_missing_optional_claims_default() {
        let token = token_with_payload(r#"{"id":"u2"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.id, "u2");
        assert_eq!(claims.email, "");
        assert_eq!(claims.name, "");
        assert_eq!(claims.initial(), '?');
    }
}
