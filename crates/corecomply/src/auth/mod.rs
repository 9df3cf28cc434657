//! Session-to-claims resolution and role checks.
//!
//! The active [`IdentityProvider`] is chosen once at startup from
//! [`AuthProviderKind`] and shared behind an `Arc`.

mod extract;

use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AuthProviderKind;

pub use extract::{claims_from_headers, require_any_role, AuthError, SESSION_HEADER};

/// Resolved identity and role set for an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub roles: Vec<String>,
}

/// Strategy resolving a session id to claims. `None` means unauthenticated.
pub trait IdentityProvider: Send + Sync + Debug {
    fn name(&self) -> &'static str;
    fn resolve_claims(&self, session_id: &str) -> Option<Claims>;
}

/// Returns the same fixed identity for every session.
#[derive(Debug, Clone)]
pub struct MockIdentityProvider {
    claims: Claims,
}

impl MockIdentityProvider {
    pub fn with_claims(claims: Claims) -> Self {
        Self { claims }
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::with_claims(Claims {
            user_id: "mock-user".to_string(),
            name: "Demo Compliance Lead".to_string(),
            email: "demo@corecomply.local".to_string(),
            roles: vec!["Lawyer".to_string(), "ComplianceOwner".to_string()],
        })
    }
}

impl IdentityProvider for MockIdentityProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn resolve_claims(&self, _session_id: &str) -> Option<Claims> {
        Some(self.claims.clone())
    }
}

/// Placeholder for the external (Entra) directory. Never yields claims.
#[derive(Debug, Clone, Default)]
pub struct ExternalIdentityProvider;

impl IdentityProvider for ExternalIdentityProvider {
    fn name(&self) -> &'static str {
        "entra"
    }

    fn resolve_claims(&self, session_id: &str) -> Option<Claims> {
        debug!(
            session_len = session_id.len(),
            "external identity resolution is disabled"
        );
        None
    }
}

pub fn provider_for(kind: AuthProviderKind) -> Arc<dyn IdentityProvider> {
    match kind {
        AuthProviderKind::Mock => Arc::new(MockIdentityProvider::default()),
        AuthProviderKind::Entra => Arc::new(ExternalIdentityProvider),
    }
}

pub fn has_role(claims: &Claims, role: &str) -> bool {
    claims.roles.iter().any(|held| held == role)
}

/// True iff at least one of `roles` is held.
pub fn has_any_role<S: AsRef<str>>(claims: &Claims, roles: &[S]) -> bool {
    roles.iter().any(|role| has_role(claims, role.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with(roles: &[&str]) -> Claims {
        Claims {
            user_id: "u-1".to_string(),
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            roles: roles.iter().map(|role| role.to_string()).collect(),
        }
    }

    #[test]
    fn has_any_role_requires_intersection() {
        let claims = claims_with(&["Lawyer", "ComplianceOwner"]);
        assert!(has_any_role(&claims, &["CFO", "Lawyer"]));
        assert!(!has_any_role(&claims, &["CFO", "Auditor"]));
        assert!(!has_any_role::<&str>(&claims, &[]));
    }

    #[test]
    fn has_role_is_exact_match() {
        let claims = claims_with(&["ComplianceOwner"]);
        assert!(has_role(&claims, "ComplianceOwner"));
        assert!(!has_role(&claims, "complianceowner"));
        assert!(!has_role(&claims, "Compliance"));
    }

    #[test]
    fn mock_provider_ignores_session_id() {
        let provider = MockIdentityProvider::default();
        let empty = provider.resolve_claims("").expect("claims for empty session");
        let other = provider
            .resolve_claims("session-42")
            .expect("claims for any session");
        assert_eq!(empty, other);
        assert_eq!(empty.user_id, "mock-user");
        assert_eq!(empty.roles, vec!["Lawyer", "ComplianceOwner"]);
    }

    #[test]
    fn external_provider_yields_no_claims() {
        let provider = provider_for(AuthProviderKind::Entra);
        assert_eq!(provider.name(), "entra");
        assert!(provider.resolve_claims("session-42").is_none());
    }
}
