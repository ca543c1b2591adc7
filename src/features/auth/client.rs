//! Client wrappers for the portal's `auth/*` endpoints. Credentials pass
//! through these helpers untouched and are never logged.

use super::{
    signup::RegistrationRequest,
    types::{LoginRequest, LoginResponse},
};
use crate::api::{ApiClient, ApiError};
use tracing::{info, instrument};

/// Shown when the backend rejects a login without a message of its own.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
/// Shown when the backend rejects a registration without a message of its own.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

/// Exchanges email and password for a bearer token and user record.
///
/// # Errors
/// Returns `ApiError::Http` for rejected credentials and transport errors
/// otherwise.
#[instrument(skip_all)]
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let response: LoginResponse = api.post_json(&["auth", "login"], request, None).await?;
    if response.token.is_blank() {
        return Err(ApiError::Parse(
            "Login response did not include a token.".to_string(),
        ));
    }
    info!(role = %response.user.role, "login accepted");
    Ok(response)
}

/// Creates an account. Admin accounts use `auth/register-admin` and carry the
/// admin secret; everyone else uses `auth/register`.
///
/// # Errors
/// Returns `ApiError::Http` when the backend refuses the registration.
#[instrument(skip_all)]
pub async fn register(api: &ApiClient, request: &RegistrationRequest) -> Result<(), ApiError> {
    match request {
        RegistrationRequest::Standard(body) => {
            api.post_json_empty(&["auth", "register"], body, None).await
        }
        RegistrationRequest::Admin(body) => {
            api.post_json_empty(&["auth", "register-admin"], body, None)
                .await
        }
    }
}
