//! Standardized response envelopes for sign-up outcomes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::signup::Account;

/// Validation outcome description, tagged by cause.
///
/// `MissingParam` and `InvalidParam` carry the offending field so callers can
/// assert on the cause, not just the status code. `ServerFault` carries
/// nothing: unexpected failures must not leak detail.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", content = "field", rename_all = "snake_case")]
pub enum SignupError {
    #[error("missing parameter: {0}")]
    MissingParam(String),
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
    #[error("internal server error")]
    ServerFault,
}

/// Response envelope: a status code and its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: ReplyBody,
}

/// Body of a [`Reply`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReplyBody {
    Error(SignupError),
    Account(Account),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Envelope for a client-side validation failure.
pub fn bad_request(error: SignupError) -> Reply {
    Reply {
        status: StatusCode::BAD_REQUEST,
        body: ReplyBody::Error(error),
    }
}

/// Envelope for an unexpected failure. Generic on purpose.
pub fn server_error() -> Reply {
    Reply {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: ReplyBody::Error(SignupError::ServerFault),
    }
}

/// Envelope for a successful sign-up.
pub fn ok(account: Account) -> Reply {
    Reply {
        status: StatusCode::OK,
        body: ReplyBody::Account(account),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bad_request_keeps_error() {
        let reply = bad_request(SignupError::MissingParam("name".into()));
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            reply.body,
            ReplyBody::Error(SignupError::MissingParam("name".into()))
        );
    }

    #[test]
    fn test_server_error_is_generic() {
        let reply = server_error();
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            serde_json::to_value(&reply.body).unwrap(),
            json!({ "error": "server_fault" })
        );
    }

    #[test]
    fn test_ok_passes_account_unchanged() {
        let account = Account {
            id: "valid_id".into(),
            name: "any_name".into(),
            email: "any@hotmail.com".into(),
            password: "any_password".into(),
        };
        let reply = ok(account.clone());
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, ReplyBody::Account(account));
    }

    #[test]
    fn test_error_serialization_names_field() {
        assert_eq!(
            serde_json::to_value(SignupError::InvalidParam("email".into()))
                .unwrap(),
            json!({ "error": "invalid_param", "field": "email" })
        );
    }
}
