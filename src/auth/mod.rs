//! Admin authentication: a single shared password and a signed session
//! cookie.
//!
//! ```text
//! POST /admin/login ──► AuthGate::login ──► Set-Cookie: session=<signed claims>
//!
//! request ──► AdminSession (extractor) ──► handler decides (redirect / page)
//!         └─► require_admin (middleware) ──► 401 or next handler
//! ```

pub mod gate;
pub mod middleware;
pub mod session;

pub use gate::AuthGate;
pub use middleware::{AdminSession, require_admin};
pub use session::{SESSION_COOKIE, SessionClaims};
