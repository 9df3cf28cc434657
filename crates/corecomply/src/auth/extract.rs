use axum::http::HeaderMap;

use super::{has_any_role, Claims, IdentityProvider};

/// Header carrying the caller's session identifier.
pub const SESSION_HEADER: &str = "x-session-id";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("session is not authenticated")]
    Unauthenticated,
    #[error("requires one of roles: {}", .required.join(", "))]
    Forbidden { required: Vec<String> },
}

/// Resolve claims for the session named in [`SESSION_HEADER`].
///
/// A missing header is passed to the provider as an empty session id.
pub fn claims_from_headers(
    headers: &HeaderMap,
    provider: &dyn IdentityProvider,
) -> Result<Claims, AuthError> {
    let session_id = headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    provider
        .resolve_claims(session_id)
        .ok_or(AuthError::Unauthenticated)
}

pub fn require_any_role(claims: &Claims, roles: &[&str]) -> Result<(), AuthError> {
    if has_any_role(claims, roles) {
        Ok(())
    } else {
        Err(AuthError::Forbidden {
            required: roles.iter().map(|role| role.to_string()).collect(),
        })
    }
}
