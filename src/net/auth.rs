//! Authentication endpoints.
//!
//! These are the only API calls that feed the session directly: a login
//! response becomes a [`LoginGrant`] for `SessionContext::login`, and the
//! profile fetch refreshes the cached user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Serialize;
use serde_json::Value;

use super::api::{ApiClient, ApiRequest};
use super::error::ApiFailure;
use crate::state::session::{LoginGrant, Session};

pub const LOGIN_ENDPOINT: &str = "api/auth/login";
pub const LOGOUT_ENDPOINT: &str = "api/auth/logout";
pub const FORGOT_PASSWORD_ENDPOINT: &str = "api/auth/forgot-password";
pub const RESET_PASSWORD_ENDPOINT: &str = "api/auth/reset-password";
pub const PROFILE_ENDPOINT: &str = "api/profile/me";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotPassword {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResetPassword {
    pub token: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Decode a login response, accepting a bare grant or one wrapped in `data`.
///
/// # Errors
///
/// Returns [`ApiFailure::InvalidResponse`] when no non-empty token is present.
pub fn decode_grant(body: Value) -> Result<LoginGrant, ApiFailure> {
    let body = match body {
        Value::Object(mut map) if map.get("data").is_some_and(Value::is_object) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    let grant: LoginGrant =
        serde_json::from_value(body).map_err(|e| ApiFailure::InvalidResponse(e.to_string()))?;
    if grant.token.is_empty() {
        return Err(ApiFailure::InvalidResponse("login response without token".to_owned()));
    }
    Ok(grant)
}

/// `POST api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiFailure`] if the request fails or the response carries no token.
pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<LoginGrant, ApiFailure> {
    let request = ApiRequest::post(LOGIN_ENDPOINT).json(credentials)?;
    let body = client.call(request, &Session::default()).await?;
    decode_grant(body)
}

/// `POST api/auth/logout`. The caller clears the local session regardless.
///
/// # Errors
///
/// Returns [`ApiFailure`] if the request fails.
pub async fn logout(client: &ApiClient, session: &Session) -> Result<(), ApiFailure> {
    client.call(ApiRequest::post(LOGOUT_ENDPOINT), session).await?;
    Ok(())
}

/// `POST api/auth/forgot-password`.
///
/// # Errors
///
/// Returns [`ApiFailure`] if the request fails.
pub async fn forgot_password(client: &ApiClient, payload: &ForgotPassword) -> Result<Value, ApiFailure> {
    let request = ApiRequest::post(FORGOT_PASSWORD_ENDPOINT).json(payload)?;
    client.call(request, &Session::default()).await
}

/// `POST api/auth/reset-password`.
///
/// # Errors
///
/// Returns [`ApiFailure`] if the request fails.
pub async fn reset_password(client: &ApiClient, payload: &ResetPassword) -> Result<Value, ApiFailure> {
    let request = ApiRequest::post(RESET_PASSWORD_ENDPOINT).json(payload)?;
    client.call(request, &Session::default()).await
}

/// `GET api/profile/me`, unwrapping a `data` envelope if present.
///
/// # Errors
///
/// Returns [`ApiFailure`] if the request fails.
pub async fn fetch_profile(client: &ApiClient, session: &Session) -> Result<Value, ApiFailure> {
    let body = client.call(ApiRequest::get(PROFILE_ENDPOINT), session).await?;
    Ok(match body {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
        other => other,
    })
}
