//! HTTP helpers for the portal's JSON API with a consistent timeout, user agent
//! and error mapping. Feature clients go through these helpers instead of
//! building requests themselves. Bearer tokens are attached here and never
//! logged.

use super::{config::ApiConfig, errors::ApiError};
use crate::APP_USER_AGENT;
use reqwest::{header::AUTHORIZATION, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiClient {
    /// Builds the shared HTTP client for the configured backend.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the TLS backend cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL. Each segment is percent-encoded,
    /// so values such as `Psychiatrist / Psychologist` stay a single segment.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the base URL cannot carry path segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Config("API base URL cannot carry paths.".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GETs JSON, optionally with a bearer token.
    ///
    /// # Errors
    /// Returns transport, HTTP or decoding failures as `ApiError`.
    #[instrument(skip_all, fields(path = %segments.join("/")))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        bearer: Option<&str>,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        let request = with_bearer(self.http.get(url), bearer);
        let response = send(request).await?;
        handle_json_response(response).await
    }

    /// POSTs a JSON body and decodes a JSON response.
    ///
    /// # Errors
    /// Returns transport, HTTP or decoding failures as `ApiError`.
    #[instrument(skip_all, fields(path = %segments.join("/")))]
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
        bearer: Option<&str>,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        let request = with_bearer(self.http.post(url).json(body), bearer);
        let response = send(request).await?;
        handle_json_response(response).await
    }

    /// POSTs a JSON body and ignores whatever the backend answers on success.
    ///
    /// # Errors
    /// Returns transport or HTTP failures as `ApiError`.
    #[instrument(skip_all, fields(path = %segments.join("/")))]
    pub async fn post_json_empty<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
        bearer: Option<&str>,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(segments)?;
        let request = with_bearer(self.http.post(url).json(body), bearer);
        let response = send(request).await?;
        handle_empty_response(response).await
    }
}

fn with_bearer(request: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
    match bearer {
        Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
        None => request,
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(map_request_error)?;
    debug!(status = response.status().as_u16(), "backend responded");
    Ok(response)
}

/// Maps reqwest failures into `ApiError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        ApiError::Serialization(format!("Failed to build request: {err}"))
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}

async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn handle_empty_response(response: Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ApiError::Http {
        status,
        message: error_message(&body),
    }
}

/// Extracts the backend `{message}` field, falling back to the trimmed and
/// truncated body text.
fn error_message(body: &str) -> Option<String> {
    if let Ok(ErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ErrorBody>(body)
    {
        return sanitize_body(&message);
    }

    if serde_json::from_str::<serde_json::Value>(body).is_ok() {
        return None;
    }

    sanitize_body(body)
}

fn sanitize_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}
