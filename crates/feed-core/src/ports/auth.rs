//! Token and password service ports.

use chrono::TimeDelta;
use uuid::Uuid;

/// Claims carried by a verified identity token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub email: String,
    /// Absolute expiry, seconds since the Unix epoch.
    pub expires_at: i64,
}

/// Issues and verifies signed, time-bounded identity tokens.
///
/// Both operations are pure functions of claims, secret, and clock; rotating
/// the signing secret invalidates every outstanding token.
pub trait TokenService: Send + Sync {
    /// Produce a signed token embedding the claims and an absolute expiry.
    fn issue(&self, user_id: Uuid, email: &str, ttl: TimeDelta) -> Result<String, AuthError>;

    /// Decode and check a token. Any failure yields no claims at all.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Lifetime applied when callers do not pick a TTL themselves.
    fn default_ttl(&self) -> TimeDelta;
}

/// One-way password hashing with verification.
pub trait PasswordService: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication failures.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The token could not be decoded at all.
    #[error("Malformed token: {0}")]
    Malformed(String),

    /// The signature does not match the server secret.
    #[error("Bad token signature")]
    BadSignature,

    /// The current time exceeds the embedded expiry.
    #[error("Token expired")]
    Expired,

    #[error("Failed to sign token: {0}")]
    Signing(String),

    #[error("Hashing error: {0}")]
    Hashing(String),
}
