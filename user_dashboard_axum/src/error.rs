use axum::response::Json;
use http::StatusCode;
use serde_json::{Value, json};
use user_dashboard::UserError;

/// Status code plus structured JSON body, the failure shape of every
/// API handler in this crate.
pub(crate) type ApiError = (StatusCode, Json<Value>);

/// Helper trait for converting errors to a standard response error format
pub(crate) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, ApiError>;
}

/// Implementation for UserError to map variants to appropriate status codes.
///
/// Storage faults deliberately get a generic body; driver messages are
/// logged but never returned to the client.
impl<T> IntoResponseError<T> for Result<T, UserError> {
    fn into_response_error(self) -> Result<T, ApiError> {
        self.map_err(|e| match e {
            UserError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "User not found" })),
            ),
            UserError::InvalidData(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg })))
            }
            UserError::Storage(msg) => {
                tracing::error!("Storage failure: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Storage unavailable" })),
                )
            }
        })
    }
}
