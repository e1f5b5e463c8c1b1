use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use sweetshop_core::DomainError;

/// Every ledger failure is a client error: 400 with the message as plain text.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    tracing::warn!(code = err.code(), error = %err, "request rejected");
    plain_text_error(StatusCode::BAD_REQUEST, err.to_string())
}

/// Body that is not valid JSON (or not an object) never reaches the ledger.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::warn!(error = %rejection.body_text(), "malformed request body");
    plain_text_error(StatusCode::BAD_REQUEST, rejection.body_text())
}

pub fn plain_text_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, message.into()).into_response()
}
