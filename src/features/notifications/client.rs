use super::types::{Notification, NotificationsResponse};
use crate::{
    api::{ApiClient, ApiError},
    features::auth::BearerToken,
};

/// Fetches the caller's notifications. A body without a `notifications`
/// array counts as none.
///
/// # Errors
/// Returns `ApiError` on transport or HTTP failure.
pub async fn list_notifications(
    api: &ApiClient,
    token: &BearerToken,
) -> Result<Vec<Notification>, ApiError> {
    let response: NotificationsResponse = api
        .get_json(&["auth", "notifications"], Some(token.as_str()))
        .await?;
    Ok(response.notifications)
}
