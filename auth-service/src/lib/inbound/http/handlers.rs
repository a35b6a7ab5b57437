use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::account::errors::AuthError;
use crate::account::errors::EmailError;
use crate::account::models::AccessToken;
use crate::account::models::Credentials;
use crate::account::models::EmailAddress;

pub mod me;
pub mod signin;
pub mod signup;

/// Message returned for every rejected sign-in.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    ServiceUnavailable(String),
    BadRequest(String),
    Conflict(String),
    Forbidden(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiErrorBody::new(status, message))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::Forbidden(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            AuthError::EmailAlreadyInUse(_) => ApiError::Conflict(err.to_string()),
            AuthError::Hashing(_) | AuthError::TokenIssuance(_) => {
                tracing::error!(error = %err, "Authentication request failed");
                ApiError::InternalServerError("Internal server error".to_string())
            }
            AuthError::PersistenceUnavailable(_) => {
                tracing::error!(error = %err, "Authentication request failed");
                ApiError::ServiceUnavailable("Service temporarily unavailable".to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub status_code: u16,
    pub message: String,
}

impl ApiErrorBody {
    pub fn new(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            message,
        }
    }
}

/// HTTP request body shared by signup and signin (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCredentialsRequestError {
    #[error("{0}")]
    Email(#[from] EmailError),

    #[error("password should not be empty")]
    EmptyPassword,
}

impl CredentialsRequest {
    fn try_into_credentials(self) -> Result<Credentials, ParseCredentialsRequestError> {
        let email = EmailAddress::new(self.email.unwrap_or_default())?;
        let password = self
            .password
            .filter(|password| !password.is_empty())
            .ok_or(ParseCredentialsRequestError::EmptyPassword)?;
        Ok(Credentials::new(email, password))
    }
}

impl From<ParseCredentialsRequestError> for ApiError {
    fn from(err: ParseCredentialsRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Turn an extracted JSON body into validated credentials.
///
/// Missing body, wrong content type, bad JSON, and empty fields all map to 400.
pub(crate) fn parse_credentials(
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Credentials, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(request.try_into_credentials()?)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessTokenResponseData {
    pub access_token: String,
}

impl From<AccessToken> for AccessTokenResponseData {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.into_inner(),
        }
    }
}
