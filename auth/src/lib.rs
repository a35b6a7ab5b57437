//! Credential and access token primitives
//!
//! Provides the building blocks the account service composes:
//! - Password hashing (Argon2id)
//! - Access token issuance and validation (HS256 JWT, fixed 15 minute lifetime)
//! - Time and secret abstractions injected into both
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify(&hash, "my_password").unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use std::sync::Arc;
//!
//! use auth::{SigningSecret, SystemClock, TokenIssuer, TokenValidator};
//!
//! let secret = SigningSecret::from("secret_key_at_least_32_bytes_long!");
//! let issuer = TokenIssuer::new(&secret, Arc::new(SystemClock));
//! let validator = TokenValidator::new(&secret, Arc::new(SystemClock));
//!
//! let token = issuer.issue(42, "evgen@gmail.com").unwrap();
//! let claims = validator.validate(&token).unwrap();
//! assert_eq!(claims.sub, "42");
//! ```

pub mod clock;
pub mod jwt;
pub mod password;
pub mod secret;

pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use jwt::TokenValidator;
pub use jwt::ACCESS_TOKEN_TTL_SECONDS;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use secret::SigningSecret;
