//! Request and response types for auth-related API calls. Login and register
//! payloads carry passwords and the admin secret, so they must never be logged.

use super::{role::RoleClaim, token::BearerToken};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User record returned by `auth/login` and persisted under the `user` key.
/// Profile fields the client does not interpret are kept in `profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: RoleClaim,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

/// Authenticated identity: credential and user record always travel together.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: BearerToken,
    pub user: UserRecord,
}

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: BearerToken,
    pub user: UserRecord,
}

/// Body for `auth/register` (patients and doctors).
#[derive(Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub avatar: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

/// Body for `auth/register-admin`.
#[derive(Clone, Serialize)]
pub struct AdminRegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
    pub phone: String,
    pub secret: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
