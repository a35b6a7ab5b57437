use async_trait::async_trait;

use crate::account::errors::AuthError;
use crate::account::errors::RepositoryError;
use crate::account::models::AccessToken;
use crate::account::models::Credentials;
use crate::account::models::EmailAddress;
use crate::account::models::NewUser;
use crate::account::models::User;

/// Port for account authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account and issue its first access token.
    ///
    /// # Arguments
    /// * `credentials` - Validated email and plaintext password
    ///
    /// # Returns
    /// Signed access token for the new user
    ///
    /// # Errors
    /// * `EmailAlreadyInUse` - Email is already registered
    /// * `Hashing` - Password hashing failed
    /// * `PersistenceUnavailable` - Storage operation failed
    async fn signup(&self, credentials: Credentials) -> Result<AccessToken, AuthError>;

    /// Authenticate an existing account and issue an access token.
    ///
    /// # Arguments
    /// * `credentials` - Email and plaintext password
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `PersistenceUnavailable` - Storage operation failed
    async fn signin(&self, credentials: Credentials) -> Result<AccessToken, AuthError>;
}

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user; storage assigns `id` and `created_at`.
    ///
    /// # Errors
    /// * `EmailTaken` - Email is already registered
    /// * `Unavailable` - Storage operation failed
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;

    /// Retrieve user by exact email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Unavailable` - Storage operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, RepositoryError>;
}
