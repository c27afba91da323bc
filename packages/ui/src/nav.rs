//! # Login redirects with a recorded return path
//!
//! Any action that needs a signed-in user bounces to the login page,
//! carrying where the user was headed in a `returnUrl` query parameter so
//! a successful login lands them back on the page they came from instead
//! of a generic dashboard.

use urlencoding::{decode, encode};

pub const LOGIN_PATH: &str = "/login";

/// Where login sends the user when no return target was recorded.
pub const DEFAULT_AFTER_LOGIN: &str = "/user/dashboard";

/// Path to the login page recording the intended destination.
pub fn login_path(return_to: &str) -> String {
    if return_to.is_empty() || return_to == "/" {
        return LOGIN_PATH.to_string();
    }
    format!("{LOGIN_PATH}?returnUrl={}", encode(return_to))
}

/// Resolve the recorded destination after a successful login.
///
/// Only in-app absolute paths are honored, so a crafted link cannot bounce
/// a fresh session off to another origin. Anything else falls back to the
/// dashboard.
pub fn return_target(return_url: &str) -> String {
    let decoded = decode(return_url)
        .map(|s| s.into_owned())
        .unwrap_or_default();

    if decoded.starts_with('/') && !decoded.starts_with("//") {
        decoded
    } else {
        DEFAULT_AFTER_LOGIN.to_string()
    }
}

/// Hard browser redirect. Used for the login bounce so the destination
/// page mounts fresh and re-derives its session from storage.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(path, "redirect requested outside the browser");
    }
}

/// The current location's path plus query, used as the return target when
/// bouncing to login.
pub fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            let path = location.pathname().unwrap_or_default();
            let search = location.search().unwrap_or_default();
            if !path.is_empty() {
                return format!("{path}{search}");
            }
        }
        "/".to_string()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "/".to_string()
    }
}

/// Extract a parameter's raw (still-encoded) value from a `?a=b&c=d`
/// query string.
pub fn param_from_query(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}

/// Read a query parameter from the current location.
pub fn current_query_param(name: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let search = window.location().search().ok()?;
        param_from_query(&search, name)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = name;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_path_records_return_target() {
        assert_eq!(login_path("/blog/42"), "/login?returnUrl=%2Fblog%2F42");
        assert_eq!(login_path(""), "/login");
        assert_eq!(login_path("/"), "/login");
    }

    #[test]
    fn test_return_target_round_trips_through_login_path() {
        let original = "/blog/42?tab=comments";
        let path = login_path(original);
        let encoded = path.strip_prefix("/login?returnUrl=").unwrap();
        assert_eq!(return_target(encoded), original);
    }

    #[test]
    fn test_missing_or_foreign_targets_fall_back_to_dashboard() {
        assert_eq!(return_target(""), DEFAULT_AFTER_LOGIN);
        assert_eq!(return_target("https%3A%2F%2Fevil.example"), DEFAULT_AFTER_LOGIN);
        assert_eq!(return_target("%2F%2Fevil.example"), DEFAULT_AFTER_LOGIN);
        assert_eq!(return_target("not-a-path"), DEFAULT_AFTER_LOGIN);
    }

    #[test]
    fn test_plain_paths_pass_through_undecoded() {
        assert_eq!(return_target("/author/dashboard"), "/author/dashboard");
    }

    #[test]
    fn test_param_from_query() {
        assert_eq!(
            param_from_query("?returnUrl=%2Fblog%2F42&x=1", "returnUrl").as_deref(),
            Some("%2Fblog%2F42")
        );
        assert_eq!(
            param_from_query("a=1&b=2", "b").as_deref(),
            Some("2")
        );
        assert_eq!(param_from_query("?a=1", "missing"), None);
        assert_eq!(param_from_query("", "a"), None);
    }

    #[test]
    fn test_login_round_trip_lands_back_on_the_original_page() {
        // Signed-out reader on a post page gets bounced to login; after a
        // successful login the recorded target brings them back to the
        // post, not a generic dashboard.
        let origin = "/blog/42";
        let bounce = login_path(origin);
        let recorded = param_from_query(bounce.split_once('?').unwrap().1, "returnUrl").unwrap();
        assert_eq!(return_target(&recorded), origin);
    }
}
