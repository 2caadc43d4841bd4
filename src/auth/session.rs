//! Session claims carried in the signed `session` cookie.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

/// Contents of the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Whether the holder passed the admin password check.
    pub admin: bool,
    /// Expiry as Unix seconds.
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for a fresh admin session valid for `ttl_secs` from `now`.
    #[must_use]
    pub fn admin(now: DateTime<Utc>, ttl_secs: u64) -> Self {
        let ttl = i64::try_from(ttl_secs).unwrap_or(i64::MAX);
        Self {
            admin: true,
            exp: now.timestamp().saturating_add(ttl),
        }
    }

    /// Returns `true` if the claims grant admin access at `now`.
    #[must_use]
    pub fn is_valid_admin(&self, now: DateTime<Utc>) -> bool {
        self.admin && now.timestamp() < self.exp
    }

    /// Serializes the claims as the cookie value.
    #[must_use]
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parses a cookie value; malformed input yields `None`.
    #[must_use]
    pub fn decode(value: &str) -> Option<Self> {
        serde_json::from_str(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_admin_claims_are_valid_until_expiry() {
        let now = Utc::now();
        let claims = SessionClaims::admin(now, 60);
        assert!(claims.is_valid_admin(now));
        assert!(!claims.is_valid_admin(now + chrono::Duration::seconds(61)));
    }

    #[test]
    fn non_admin_claims_never_valid() {
        let claims = SessionClaims {
            admin: false,
            exp: i64::MAX,
        };
        assert!(!claims.is_valid_admin(Utc::now()));
    }

    #[test]
    fn cookie_value_decodes_back() {
        let claims = SessionClaims::admin(Utc::now(), 3600);
        assert_eq!(SessionClaims::decode(&claims.encode()), Some(claims));
    }

    #[test]
    fn garbage_cookie_value_is_rejected() {
        assert_eq!(SessionClaims::decode("admin=1"), None);
        assert_eq!(SessionClaims::decode(""), None);
    }

    #[test]
    fn huge_ttl_saturates() {
        let claims = SessionClaims::admin(Utc::now(), u64::MAX);
        assert_eq!(claims.exp, i64::MAX);
    }
}
