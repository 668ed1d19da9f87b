//! API failure taxonomy and the session policy applied to each failure.
//!
//! ERROR HANDLING
//! ==============
//! - expired/invalid token: forced logout, then login with `expired=true`
//!   and a `redirect` back to the current path
//! - transport failure: user-facing message, session untouched
//! - any other server code: its message, or the generic fallback

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

use crate::router::guard::REDIRECT_QUERY;
use crate::router::routes::LOGIN_ROUTE;
use crate::router::target::NavigationTarget;
use crate::state::session::SessionContext;
use crate::state::storage::SessionStorage;

pub const UNKNOWN_ERROR_MESSAGE: &str =
    "Sorry, we have encountered an unknown error. Please contact our technical team for support.";
pub const NO_CONNECTION_MESSAGE: &str =
    "We're having trouble connecting with the server. Please check your internet connection.";
pub const TIMEOUT_MESSAGE: &str =
    "Looks like the server is taking too long to respond. Please contact our technical team for support.";

/// Machine-readable `errorCode` carried by server error bodies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    Unauthenticated,
    InvalidCredentials,
    Validation,
    Smtp,
    ResourceNotFound,
    TooManyRequests,
    Unknown(String),
}

impl ErrorCode {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "UNAUTHENTICATED_ERROR" => Self::Unauthenticated,
            "INVALID_CREDENTIALS_ERROR" => Self::InvalidCredentials,
            "VALIDATION_ERROR" => Self::Validation,
            "SMTP_ERROR" => Self::Smtp,
            "RESOURCE_NOT_FOUND_ERROR" => Self::ResourceNotFound,
            "TOO_MANY_REQUESTS_ERROR" => Self::TooManyRequests,
            other => Self::Unknown(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED_ERROR",
            Self::InvalidCredentials => "INVALID_CREDENTIALS_ERROR",
            Self::Validation => "VALIDATION_ERROR",
            Self::Smtp => "SMTP_ERROR",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND_ERROR",
            Self::TooManyRequests => "TOO_MANY_REQUESTS_ERROR",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "Your session is expired",
            Self::InvalidCredentials => "Incorrect email or password",
            Self::Validation => "We've encountered errors while validating your inputs",
            Self::Smtp => "Failed to send email",
            Self::ResourceNotFound => "Sorry, the data you are looking for seems to be missing in our database",
            Self::TooManyRequests => "We've received too many requests from you. Please try again later.",
            Self::Unknown(_) => UNKNOWN_ERROR_MESSAGE,
        }
    }
}

/// Why an API call did not produce a success payload.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiFailure {
    #[error("request failed with status {status} ({})", code_label(.code.as_ref()))]
    Response { status: u16, code: Option<ErrorCode>, body: Value },
    #[error("no connection to the server")]
    NoConnection,
    #[error("request timed out")]
    Timeout,
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("not available on server")]
    Unavailable,
}

fn code_label(code: Option<&ErrorCode>) -> &str {
    code.map_or("no error code", ErrorCode::as_str)
}

impl ApiFailure {
    /// Classify a non-2xx response by its body's `errorCode`.
    pub fn from_response(status: u16, body: Value) -> Self {
        let code = body.get("errorCode").and_then(Value::as_str).map(ErrorCode::parse);
        Self::Response { status, code, body }
    }

    pub fn code(&self) -> Option<&ErrorCode> {
        match self {
            Self::Response { code, .. } => code.as_ref(),
            _ => None,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.code() == Some(&ErrorCode::Unauthenticated)
    }

    /// Message suitable for a toast or inline form error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Response { code: Some(code), .. } => code.message(),
            Self::NoConnection => NO_CONNECTION_MESSAGE,
            Self::Timeout => TIMEOUT_MESSAGE,
            _ => UNKNOWN_ERROR_MESSAGE,
        }
    }
}

/// What the UI should do after a failed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureResolution {
    pub message: &'static str,
    /// Full URL to navigate to, set only for forced logouts.
    pub redirect: Option<String>,
}

/// Login URL used after a forced logout.
pub fn expired_login_url(current_path: &str) -> String {
    NavigationTarget::new(LOGIN_ROUTE)
        .with_query("expired", "true")
        .with_query(REDIRECT_QUERY, current_path)
        .to_url()
}

/// Apply the session policy for `failure` observed while on `current_path`.
///
/// An expired token logs the session out before returning, so any
/// navigation triggered by the resolution sees the cleared state.
pub fn resolve_failure<S: SessionStorage>(
    failure: &ApiFailure,
    session: &mut SessionContext<S>,
    current_path: &str,
) -> FailureResolution {
    if failure.is_unauthenticated() {
        session.logout();
        log::info!("forced logout after expired token on {current_path}");
        return FailureResolution { message: failure.user_message(), redirect: Some(expired_login_url(current_path)) };
    }
    log::warn!("api failure on {current_path}: {failure}");
    FailureResolution { message: failure.user_message(), redirect: None }
}
