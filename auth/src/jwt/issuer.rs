use std::sync::Arc;

use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::TokenError;
use crate::clock::Clock;
use crate::secret::SigningSecret;

/// Issues signed, time-bounded access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Issuance is pure CPU work and safe to run
/// inline on the async runtime.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Create a new issuer.
    ///
    /// # Arguments
    /// * `secret` - Process-wide signing secret
    /// * `clock` - Time source for `iat`/`exp`
    pub fn new(secret: &SigningSecret, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            clock,
        }
    }

    /// Issue a token for `subject`, valid for fifteen minutes from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: impl ToString, email: &str) -> Result<String, TokenError> {
        let claims = Claims::new(subject, email, self.clock.now());
        self.sign(&claims)
    }

    /// Sign an already constructed claim set.
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn issuer_at(timestamp: i64) -> TokenIssuer {
        TokenIssuer::new(
            &SigningSecret::from("my_secret_key_at_least_32_bytes_long!"),
            Arc::new(FixedClock::at_timestamp(timestamp)),
        )
    }

    #[test]
    fn test_issue_produces_three_part_token() {
        let token = issuer_at(1_700_000_000)
            .issue("user123", "evgen@gmail.com")
            .expect("Failed to issue token");

        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_issue_is_deterministic_for_same_time() {
        let issuer = issuer_at(1_700_000_000);

        let first = issuer.issue("user123", "evgen@gmail.com").unwrap();
        let second = issuer.issue("user123", "evgen@gmail.com").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_issue_varies_with_time() {
        let first = issuer_at(1_700_000_000)
            .issue("user123", "evgen@gmail.com")
            .unwrap();
        let second = issuer_at(1_700_000_001)
            .issue("user123", "evgen@gmail.com")
            .unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_token_does_not_contain_secret() {
        let token = issuer_at(1_700_000_000)
            .issue("user123", "evgen@gmail.com")
            .unwrap();

        assert!(!token.contains("my_secret_key_at_least_32_bytes_long!"));
    }
}
