//! Shared backend access: endpoint configuration, the JSON HTTP client and the
//! error type every feature client returns.
//!
//! All failures are converted into [`ApiError`] at this layer and then into
//! inline messages by the caller. Nothing is retried.

pub mod client;
pub mod config;
pub mod errors;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use errors::ApiError;
