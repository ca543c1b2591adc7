use super::types::Report;
use crate::{
    api::{ApiClient, ApiError},
    features::auth::BearerToken,
};

/// Lists the caller's medical reports.
///
/// # Errors
/// Returns `ApiError` on transport or HTTP failure.
pub async fn my_reports(api: &ApiClient, token: &BearerToken) -> Result<Vec<Report>, ApiError> {
    api.get_json(&["reports", "my-reports"], Some(token.as_str()))
        .await
}
