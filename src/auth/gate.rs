//! Password check and session cookie management.

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use chrono::Utc;
use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;

use super::session::{SESSION_COOKIE, SessionClaims};
use crate::error::ApiError;

/// Decides whether a request belongs to the admin.
///
/// Holds the cookie signing key, the configured admin password and the
/// session lifetime. There is no per-user identity: anyone presenting the
/// password gets the same admin session.
#[derive(Clone)]
pub struct AuthGate {
    key: Key,
    admin_password: Option<String>,
    session_ttl_secs: u64,
}

impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate")
            .field("key", &"<redacted>")
            .field("admin_password_set", &self.admin_password.is_some())
            .field("session_ttl_secs", &self.session_ttl_secs)
            .finish()
    }
}

impl AuthGate {
    /// Creates a gate. The signing key is derived from `secret` with
    /// SHA-512, so secrets of any length are accepted.
    #[must_use]
    pub fn new(secret: &str, admin_password: Option<String>, session_ttl_secs: u64) -> Self {
        Self {
            key: derive_key(secret),
            admin_password,
            session_ttl_secs,
        }
    }

    /// Returns the cookie signing key.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Returns `true` if an admin password is configured.
    #[must_use]
    pub fn login_enabled(&self) -> bool {
        self.admin_password.is_some()
    }

    /// Checks `password` and, on success, adds an admin session to `jar`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredentials`] if the password does not
    /// match exactly, or if no admin password is configured. The jar is
    /// left untouched in that case.
    pub fn login(&self, jar: SignedCookieJar, password: &str) -> Result<SignedCookieJar, ApiError> {
        if !self.password_matches(password) {
            tracing::warn!("admin login rejected");
            return Err(ApiError::InvalidCredentials);
        }

        let claims = SessionClaims::admin(Utc::now(), self.session_ttl_secs);
        let cookie = Cookie::build((SESSION_COOKIE, claims.encode()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        tracing::info!("admin logged in");
        Ok(jar.add(cookie))
    }

    /// Removes the session from `jar`. Harmless when there is none.
    #[must_use]
    pub fn logout(&self, jar: SignedCookieJar) -> SignedCookieJar {
        jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
    }

    /// Reads the admin flag from a verified jar. Absent, tampered,
    /// malformed or expired sessions read as `false`.
    #[must_use]
    pub fn is_authenticated(&self, jar: &SignedCookieJar) -> bool {
        jar.get(SESSION_COOKIE)
            .and_then(|cookie| SessionClaims::decode(cookie.value()))
            .is_some_and(|claims| claims.is_valid_admin(Utc::now()))
    }

    fn password_matches(&self, candidate: &str) -> bool {
        self.admin_password
            .as_deref()
            .is_some_and(|expected| bool::from(candidate.as_bytes().ct_eq(expected.as_bytes())))
    }
}

fn derive_key(secret: &str) -> Key {
    let mut hasher = Sha512::new();
    hasher.update(secret.as_bytes());
    Key::from(&hasher.finalize().to_vec())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::http::HeaderMap;
    use axum::http::header::{COOKIE, SET_COOKIE};
    use axum::response::IntoResponse;

    use super::*;

    fn gate() -> AuthGate {
        AuthGate::new("test-secret", Some("correct".to_string()), 3600)
    }

    /// Replays the `Set-Cookie` headers of `jar` as a request `Cookie` header.
    fn round_trip(gate: &AuthGate, jar: SignedCookieJar) -> SignedCookieJar {
        let response = jar.into_response();
        let pairs: Vec<String> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .map(str::to_string)
            .collect();
        let mut headers = HeaderMap::new();
        if let Ok(value) = pairs.join("; ").parse() {
            headers.insert(COOKIE, value);
        }
        SignedCookieJar::from_headers(&headers, gate.key().clone())
    }

    fn empty_jar(gate: &AuthGate) -> SignedCookieJar {
        SignedCookieJar::new(gate.key().clone())
    }

    #[test]
    fn default_state_is_unauthenticated() {
        let gate = gate();
        assert!(!gate.is_authenticated(&empty_jar(&gate)));
    }

    #[test]
    fn correct_password_authenticates() {
        let gate = gate();
        let Ok(jar) = gate.login(empty_jar(&gate), "correct") else {
            panic!("login should succeed");
        };
        assert!(gate.is_authenticated(&round_trip(&gate, jar)));
    }

    #[test]
    fn password_is_case_sensitive() {
        let gate = gate();
        let result = gate.login(empty_jar(&gate), "Correct");
        assert!(matches!(result, Err(ApiError::InvalidCredentials)));
    }

    #[test]
    fn unset_password_rejects_everything() {
        let gate = AuthGate::new("test-secret", None, 3600);
        assert!(!gate.login_enabled());
        assert!(gate.login(empty_jar(&gate), "").is_err());
        assert!(gate.login(empty_jar(&gate), "anything").is_err());
    }

    #[test]
    fn logout_clears_and_is_idempotent() {
        let gate = gate();
        let Ok(jar) = gate.login(empty_jar(&gate), "correct") else {
            panic!("login should succeed");
        };
        let jar = gate.logout(round_trip(&gate, jar));
        assert!(!gate.is_authenticated(&jar));
        let jar = gate.logout(jar);
        assert!(!gate.is_authenticated(&jar));
    }

    #[test]
    fn cookie_signed_with_other_secret_is_ignored() {
        let gate = gate();
        let other = AuthGate::new("other-secret", Some("correct".to_string()), 3600);
        let Ok(jar) = other.login(empty_jar(&other), "correct") else {
            panic!("login should succeed");
        };
        let response = jar.into_response();
        let mut headers = HeaderMap::new();
        if let Some(set_cookie) = response.headers().get(SET_COOKIE) {
            let pair = set_cookie
                .to_str()
                .ok()
                .and_then(|v| v.split(';').next())
                .unwrap_or_default()
                .to_string();
            if let Ok(value) = pair.parse() {
                headers.insert(COOKIE, value);
            }
        }
        let jar = SignedCookieJar::from_headers(&headers, gate.key().clone());
        assert!(!gate.is_authenticated(&jar));
    }

    #[test]
    fn expired_session_is_unauthenticated() {
        let gate = AuthGate::new("test-secret", Some("correct".to_string()), 0);
        let Ok(jar) = gate.login(empty_jar(&gate), "correct") else {
            panic!("login should succeed");
        };
        assert!(!gate.is_authenticated(&round_trip(&gate, jar)));
    }

    #[test]
    fn debug_hides_secrets() {
        let rendered = format!("{:?}", gate());
        assert!(!rendered.contains("correct"));
    }
}
