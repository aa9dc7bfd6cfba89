use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tinylink_core::ShortenerError;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal error: {0}")]
    Internal(String),
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Shortener(err) => match err {
                ShortenerError::NotFound(_) => StatusCode::NOT_FOUND,
                ShortenerError::AlreadyExists(_) | ShortenerError::Conflict(_) => {
                    StatusCode::CONFLICT
                }
                ShortenerError::TokenSpaceExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
                ShortenerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "request failed");
            return (status, "internal error").into_response();
        }

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinylink_core::StorageError;

    #[test]
    fn status_mapping() {
        let cases = [
            (AppError::BadRequest("empty".into()), StatusCode::BAD_REQUEST),
            (AppError::Internal("oops".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                ShortenerError::NotFound("abc".into()).into(),
                StatusCode::NOT_FOUND,
            ),
            (
                ShortenerError::Conflict("abc".into()).into(),
                StatusCode::CONFLICT,
            ),
            (
                ShortenerError::TokenSpaceExhausted { attempts: 10 }.into(),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ShortenerError::Storage(StorageError::Timeout("slow".into())).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status(), expected, "{err}");
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
