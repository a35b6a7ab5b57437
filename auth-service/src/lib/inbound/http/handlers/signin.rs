use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::parse_credentials;
use super::AccessTokenResponseData;
use super::ApiError;
use super::ApiSuccess;
use super::CredentialsRequest;
use crate::account::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn signin<S: AuthServicePort>(
    State(state): State<AppState<S>>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<ApiSuccess<AccessTokenResponseData>, ApiError> {
    let credentials = parse_credentials(body)?;

    state
        .auth_service
        .signin(credentials)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, token.into()))
}
