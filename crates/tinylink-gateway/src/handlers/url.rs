use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tinylink_core::ShortenerError;

/// Shortens the URL sent as a plain-text body.
///
/// Responds `201 Created` with the new short URL, or `409 Conflict` with the
/// short URL handed out earlier if the URL was already shortened.
pub async fn create_url_handler(State(state): State<AppState>, body: String) -> Result<Response> {
    let original_url = body.trim();
    if original_url.is_empty() {
        return Err(AppError::BadRequest("request body must contain a url".into()));
    }
    // Anything we store must be usable as a Location header later.
    if HeaderValue::from_str(original_url).is_err() {
        return Err(AppError::BadRequest(
            "url must not contain control characters".into(),
        ));
    }

    match state.shortener().shorten(original_url).await {
        Ok(short_url) => Ok((StatusCode::CREATED, short_url.url).into_response()),
        Err(ShortenerError::AlreadyExists(short_url)) => {
            Ok((StatusCode::CONFLICT, short_url.url).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// Redirects to the original URL of a short code with `307 Temporary Redirect`.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let original_url = state.shortener().resolve(&short_code).await?;
    let location = HeaderValue::from_str(&original_url).map_err(|_| {
        AppError::Internal(format!("stored url for '{}' is not a valid header", short_code))
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
