use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Ошибки HTTP-слоя
///
/// The body is always plain text: the client surfaces it verbatim in an
/// alert, so no JSON envelope here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Requisição rejeitada: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
        };
        (status, message).into_response()
    }
}
