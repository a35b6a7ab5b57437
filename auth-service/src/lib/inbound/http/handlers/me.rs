use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Return the principal resolved from the bearer token.
pub async fn me(
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiSuccess<MeResponseData> {
    ApiSuccess::new(StatusCode::OK, (&user).into())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub id: String,
    pub email: String,
}

impl From<&AuthenticatedUser> for MeResponseData {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.user_id.to_string(),
            email: user.email.clone(),
        }
    }
}
