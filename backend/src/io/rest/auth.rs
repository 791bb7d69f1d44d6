//! Session-cookie authentication for API handlers.
//!
//! Unauthenticated requests are rejected with 401; there is no redirect.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::domain::errors::PlannerError;
use crate::AppState;

/// Name of the cookie carrying the session ID
pub const SESSION_COOKIE: &str = "planner_session";

/// The signed-in viewer, resolved from the session cookie
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Find the value of cookie `name` across all `Cookie` headers
pub fn find_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = PlannerError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session_id = match find_cookie(&parts.headers, SESSION_COOKIE) {
            Some(session_id) => session_id,
            None => {
                debug!("Request to {} without a session cookie", parts.uri.path());
                return Err(PlannerError::Unauthenticated);
            }
        };

        let user_id = state.session_service.resolve_user_id(&session_id).await?;
        Ok(AuthenticatedUser { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_find_cookie_among_several() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark; planner_session=abc123"));
        assert_eq!(find_cookie(&headers, SESSION_COOKIE), Some("abc123".to_string()));
    }

    #[test]
    fn test_find_cookie_across_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("planner_session=xyz"));
        assert_eq!(find_cookie(&headers, SESSION_COOKIE), Some("xyz".to_string()));
    }

    #[test]
    fn test_missing_or_empty_cookie() {
        let mut headers = HeaderMap::new();
        assert_eq!(find_cookie(&headers, SESSION_COOKIE), None);

        headers.append(COOKIE, HeaderValue::from_static("planner_session="));
        assert_eq!(find_cookie(&headers, SESSION_COOKIE), None);
    }
}
