use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shiprate_core::DomainError;
use shiprate_pricing::PricingError;

pub fn pricing_error_to_response(err: PricingError) -> axum::response::Response {
    match err {
        PricingError::UnknownCountry { .. } => {
            json_error(StatusCode::BAD_REQUEST, "unknown_country", err.to_string())
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
    }
}

pub fn invalid_body(err: serde_json::Error) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_body", err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
