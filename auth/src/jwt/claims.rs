use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Lifetime of every access token, in seconds (15 minutes).
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 15 * 60;

/// Access token claim set.
///
/// Standard RFC 7519 names are used on the wire; every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email address of the subject at issuance time
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims issued at `issued_at` and expiring one TTL later.
    pub fn new(subject: impl ToString, email: impl ToString, issued_at: DateTime<Utc>) -> Self {
        let expires_at = issued_at + Duration::seconds(ACCESS_TOKEN_TTL_SECONDS);

        Self {
            sub: subject.to_string(),
            email: email.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Check if the claims are expired at `current_timestamp`.
    ///
    /// A token is still accepted at exactly its expiration second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp > self.exp
    }
}
