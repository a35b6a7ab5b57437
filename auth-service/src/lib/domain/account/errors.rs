use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email should not be empty")]
    Empty,

    #[error("email must be an email: {0}")]
    InvalidFormat(String),
}

/// Error reported by the persistence collaborator
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Email already in use: {0}")]
    EmailTaken(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for signup and signin.
///
/// Carries no plaintext password, hash, secret or token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; both causes are deliberately identical.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already in use: {0}")]
    EmailAlreadyInUse(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),
}

impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::EmailTaken(email) => AuthError::EmailAlreadyInUse(email),
            RepositoryError::Unavailable(msg) => AuthError::PersistenceUnavailable(msg),
        }
    }
}

impl From<auth::TokenError> for AuthError {
    fn from(err: auth::TokenError) -> Self {
        AuthError::TokenIssuance(err.to_string())
    }
}
