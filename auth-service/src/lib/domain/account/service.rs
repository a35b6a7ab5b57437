use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordError;
use auth::PasswordHasher;
use auth::TokenIssuer;

use crate::account::errors::AuthError;
use crate::account::models::AccessToken;
use crate::account::models::Credentials;
use crate::account::models::NewUser;
use crate::account::models::User;
use crate::account::ports::AuthServicePort;
use crate::account::ports::UserRepository;

/// Well-formed Argon2id record that matches no password. Verified against when
/// the email is unknown so both sign-in rejections cost the same.
const DUMMY_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Domain service implementation for signup and signin.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    token_issuer: Arc<TokenIssuer>,
    password_hasher: PasswordHasher,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `token_issuer` - Access token issuer holding the signing secret
    pub fn new(repository: Arc<UR>, token_issuer: Arc<TokenIssuer>) -> Self {
        Self {
            repository,
            token_issuer,
            password_hasher: PasswordHasher::new(),
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let hasher = self.password_hasher;

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    async fn verify_password(
        &self,
        hash_record: String,
        password: String,
    ) -> Result<bool, AuthError> {
        let hasher = self.password_hasher;

        let outcome = tokio::task::spawn_blocking(move || hasher.verify(&hash_record, &password))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        match outcome {
            Ok(matches) => Ok(matches),
            Err(PasswordError::MalformedHash(reason)) => {
                tracing::warn!(reason = %reason, "Stored password hash could not be parsed");
                Ok(false)
            }
            Err(e) => Err(AuthError::Hashing(e.to_string())),
        }
    }

    fn issue_token(&self, user: &User) -> Result<AccessToken, AuthError> {
        let token = self.token_issuer.issue(user.id, user.email.as_str())?;
        Ok(AccessToken::new(token))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, credentials: Credentials) -> Result<AccessToken, AuthError> {
        let Credentials { email, password } = credentials;

        let password_hash = self.hash_password(password).await?;

        let user = self
            .repository
            .create(NewUser {
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User signed up");

        self.issue_token(&user)
    }

    async fn signin(&self, credentials: Credentials) -> Result<AccessToken, AuthError> {
        let Credentials { email, password } = credentials;

        let Some(user) = self.repository.find_by_email(&email).await? else {
            self.verify_password(DUMMY_PASSWORD_HASH.to_string(), password)
                .await?;
            tracing::debug!(reason = "unknown_email", "Sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .verify_password(user.password_hash.clone(), password)
            .await?
        {
            tracing::debug!(user_id = %user.id, reason = "password_mismatch", "Sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, "User signed in");

        self.issue_token(&user)
    }
}
